//! Target platform flag set
//!
//! `Platforms` is the closed set of build targets an assembly definition can
//! name in `includePlatforms`/`excludePlatforms`. The document stores wire
//! names ("Android", "iOS", ...); callers work with a combinable flag set.
//! Conversion between the two happens only at the editing boundary, never in
//! the document model.

use bitflags::bitflags;

bitflags! {
    /// A set of build target platforms.
    ///
    /// Bitflags so several platforms can be passed as one value:
    ///
    /// ```rust
    /// use asmedit::Platforms;
    ///
    /// let mobile = Platforms::ANDROID | Platforms::IOS;
    /// ```
    #[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash)]
    pub struct Platforms: u32 {
        const ANDROID               = 1 << 0;
        const EDITOR                = 1 << 1;
        const EMBEDDED_LINUX        = 1 << 2;
        const GAME_CORE_SCARLETT    = 1 << 3;
        const GAME_CORE_XBOX_ONE    = 1 << 4;
        const IOS                   = 1 << 5;
        const LINUX_STANDALONE_64   = 1 << 6;
        const LUMIN                 = 1 << 7;
        const MACOS_STANDALONE      = 1 << 8;
        const PS4                   = 1 << 9;
        const PS5                   = 1 << 10;
        const STADIA                = 1 << 11;
        const SWITCH                = 1 << 12;
        const TVOS                  = 1 << 13;
        const WSA                   = 1 << 14;
        const WEBGL                 = 1 << 15;
        const WINDOWS_STANDALONE_32 = 1 << 16;
        const WINDOWS_STANDALONE_64 = 1 << 17;
        const XBOX_ONE              = 1 << 18;
    }
}

/// Wire spellings, exactly as they appear inside `.asmdef` platform lists.
const WIRE_NAMES: &[(Platforms, &str)] = &[
    (Platforms::ANDROID, "Android"),
    (Platforms::EDITOR, "Editor"),
    (Platforms::EMBEDDED_LINUX, "EmbeddedLinux"),
    (Platforms::GAME_CORE_SCARLETT, "GameCoreScarlett"),
    (Platforms::GAME_CORE_XBOX_ONE, "GameCoreXboxOne"),
    (Platforms::IOS, "iOS"),
    (Platforms::LINUX_STANDALONE_64, "LinuxStandalone64"),
    (Platforms::LUMIN, "Lumin"),
    (Platforms::MACOS_STANDALONE, "macOSStandalone"),
    (Platforms::PS4, "PS4"),
    (Platforms::PS5, "PS5"),
    (Platforms::STADIA, "Stadia"),
    (Platforms::SWITCH, "Switch"),
    (Platforms::TVOS, "tvOS"),
    (Platforms::WSA, "WSA"),
    (Platforms::WEBGL, "WebGL"),
    (Platforms::WINDOWS_STANDALONE_32, "WindowsStandalone32"),
    (Platforms::WINDOWS_STANDALONE_64, "WindowsStandalone64"),
    (Platforms::XBOX_ONE, "XboxOne"),
];

impl Platforms {
    /// Wire name of a single-platform flag, `None` for empty or combined
    /// sets.
    pub fn wire_name(self) -> Option<&'static str> {
        WIRE_NAMES
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, name)| *name)
    }

    /// Look a platform up by its wire spelling. Matching is exact; the
    /// stored casing ("iOS", "macOSStandalone") is part of the format.
    pub fn from_wire_name(name: &str) -> Option<Platforms> {
        WIRE_NAMES
            .iter()
            .find(|(_, wire)| *wire == name)
            .map(|(platform, _)| *platform)
    }

    /// Wire names of every platform present in this set, in declaration
    /// order.
    pub fn wire_names(self) -> Vec<&'static str> {
        self.iter().filter_map(Platforms::wire_name).collect()
    }
}
