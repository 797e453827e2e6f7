//! Editable assembly façade
//!
//! [`EditableAssembly`] wraps one [`AssemblyDocument`] and enforces what the
//! raw record cannot: a single reference addressing mode for the lifetime of
//! the reference list, include/exclude platform exclusivity, and version
//! define bookkeeping. Expected validation failures (duplicates, mode
//! conflicts, malformed GUID input) come back as `bool` so callers can
//! branch without error handling; the document is never left partially
//! mutated.

use crate::document::{AssemblyDocument, VersionDefine};
use crate::error::{AsmeditError, AsmeditResult};
use crate::guid;
use crate::host::{AssetCatalog, DefinitionStore};
use crate::platforms::Platforms;

/// How entries in a reference list are addressed.
///
/// The document format does not store the mode; it is re-derived from the
/// first list entry whenever needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceMode {
    /// Tagged stable asset GUIDs (`GUID:...`)
    Guid,
    /// Plain assembly names
    AssemblyName,
}

/// Editing handle over one assembly definition document.
///
/// Owns its document exclusively. The `location` tag is carried verbatim for
/// [`save`](EditableAssembly::save) and never interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableAssembly {
    document: AssemblyDocument,
    location: String,
}

impl EditableAssembly {
    /// Parse definition text into an editable document.
    ///
    /// `location` may be empty when the text did not come from storage.
    pub fn from_text(text: &str, location: impl Into<String>) -> AsmeditResult<Self> {
        Ok(Self {
            document: AssemblyDocument::from_text(text)?,
            location: location.into(),
        })
    }

    /// Wrap an already-typed document
    pub fn from_document(document: AssemblyDocument, location: impl Into<String>) -> Self {
        Self {
            document,
            location: location.into(),
        }
    }

    /// Load the definition named `assembly_name` through `store`.
    ///
    /// Returns `None` when the name does not resolve, the read fails, or the
    /// stored text does not parse. The miss signal is the absence of a
    /// result, not an error.
    pub fn from_assembly_name(
        assembly_name: &str,
        store: &impl DefinitionStore,
    ) -> Option<Self> {
        let location = store.resolve_location(assembly_name)?;
        let text = store.read(&location).ok()?;
        Self::from_text(&text, location).ok()
    }

    /// The wrapped document
    pub fn document(&self) -> &AssemblyDocument {
        &self.document
    }

    /// Location tag this assembly saves to
    pub fn location(&self) -> &str {
        &self.location
    }

    // Simple field access. In-memory only; nothing here re-serializes or
    // saves.

    /// Assembly name
    pub fn name(&self) -> &str {
        &self.document.name
    }

    /// Set the assembly name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.document.name = name.into();
    }

    /// Root namespace
    pub fn root_namespace(&self) -> &str {
        &self.document.root_namespace
    }

    /// Set the root namespace
    pub fn set_root_namespace(&mut self, root_namespace: impl Into<String>) {
        self.document.root_namespace = root_namespace.into();
    }

    /// Whether `unsafe` code is allowed
    pub fn allow_unsafe_code(&self) -> bool {
        self.document.allow_unsafe_code
    }

    /// Allow or forbid `unsafe` code
    pub fn set_allow_unsafe_code(&mut self, allow: bool) {
        self.document.allow_unsafe_code = allow;
    }

    /// Whether the precompiled reference list overrides the default set
    pub fn override_references(&self) -> bool {
        self.document.override_references
    }

    /// Set the precompiled-reference override flag
    pub fn set_override_references(&mut self, value: bool) {
        self.document.override_references = value;
    }

    /// Whether other assemblies reference this one automatically
    pub fn auto_referenced(&self) -> bool {
        self.document.auto_referenced
    }

    /// Set the auto-reference flag
    pub fn set_auto_referenced(&mut self, value: bool) {
        self.document.auto_referenced = value;
    }

    /// Whether engine assemblies are kept out of the reference set
    pub fn no_engine_references(&self) -> bool {
        self.document.no_engine_references
    }

    /// Set the no-engine-references flag
    pub fn set_no_engine_references(&mut self, value: bool) {
        self.document.no_engine_references = value;
    }

    /// Current reference list
    pub fn references(&self) -> &[String] {
        &self.document.references
    }

    /// Replace the reference list verbatim, bypassing the addressing-mode
    /// protocol. The first entry of the new list fixes the mode.
    pub fn set_references(&mut self, references: Vec<String>) {
        self.document.references = references;
    }

    /// Stored include-platform wire names
    pub fn include_platform_names(&self) -> &[String] {
        &self.document.include_platforms
    }

    /// Replace the include-platform names verbatim
    pub fn set_include_platform_names(&mut self, names: Vec<String>) {
        self.document.include_platforms = names;
    }

    /// Stored exclude-platform wire names
    pub fn exclude_platform_names(&self) -> &[String] {
        &self.document.exclude_platforms
    }

    /// Replace the exclude-platform names verbatim
    pub fn set_exclude_platform_names(&mut self, names: Vec<String>) {
        self.document.exclude_platforms = names;
    }

    /// Precompiled (DLL) references
    pub fn precompiled_references(&self) -> &[String] {
        &self.document.precompiled_references
    }

    /// Replace the precompiled references
    pub fn set_precompiled_references(&mut self, references: Vec<String>) {
        self.document.precompiled_references = references;
    }

    /// Define constraints
    pub fn define_constraints(&self) -> &[String] {
        &self.document.define_constraints
    }

    /// Replace the define constraints
    pub fn set_define_constraints(&mut self, constraints: Vec<String>) {
        self.document.define_constraints = constraints;
    }

    /// Raw serialized version define entries
    pub fn version_define_entries(&self) -> &[String] {
        &self.document.version_defines
    }

    /// Replace the raw version define entries
    pub fn set_version_define_entries(&mut self, entries: Vec<String>) {
        self.document.version_defines = entries;
    }

    // Reference addressing-mode protocol. GUID-style and name-style entries
    // never mix within one list.

    /// Addressing mode fixed by the current first reference, or `None`
    /// while the list is empty and either mode is still available.
    pub fn reference_mode(&self) -> Option<ReferenceMode> {
        self.document.references.first().map(|first| {
            if guid::is_guid_reference(first) {
                ReferenceMode::Guid
            } else {
                ReferenceMode::AssemblyName
            }
        })
    }

    /// True if GUID-style references may be added
    pub fn can_use_guid_references(&self) -> bool {
        !matches!(self.reference_mode(), Some(ReferenceMode::AssemblyName))
    }

    /// True if name-style references may be added
    pub fn can_use_name_references(&self) -> bool {
        !matches!(self.reference_mode(), Some(ReferenceMode::Guid))
    }

    /// Append a name-style reference.
    ///
    /// Returns `false` without touching the list when the list is in GUID
    /// mode or already contains `assembly_name`.
    pub fn add_reference_by_name(&mut self, assembly_name: &str) -> bool {
        if !self.can_use_name_references() {
            return false;
        }
        if self.document.references.iter().any(|r| r == assembly_name) {
            return false;
        }
        self.document.references.push(assembly_name.to_string());
        true
    }

    /// Append a GUID-style reference.
    ///
    /// A bare GUID is coerced into tagged form first; input that is neither
    /// tagged nor a well-formed bare GUID is rejected. Returns `false`
    /// without touching the list on mode conflict, bad input, or duplicate.
    pub fn add_reference_by_guid(&mut self, value: &str) -> bool {
        if !self.can_use_guid_references() {
            return false;
        }
        let Some(tagged) = guid::normalize_guid(value) else {
            return false;
        };
        if self.document.references.iter().any(|r| *r == tagged) {
            return false;
        }
        self.document.references.push(tagged);
        true
    }

    /// Append a reference to the asset behind `handle`.
    ///
    /// The current mode picks which projection of the asset's identity gets
    /// stored; GUID mode wins while the list is empty.
    pub fn add_asset_reference<C: AssetCatalog>(
        &mut self,
        catalog: &C,
        handle: &C::Handle,
    ) -> bool {
        let Some(identity) = catalog.identity(handle) else {
            return false;
        };
        if self.can_use_guid_references() {
            self.add_reference_by_guid(&identity.guid)
        } else {
            self.add_reference_by_name(&identity.name)
        }
    }

    /// Replace the reference list with references to `handles`, addressed in
    /// `mode`.
    ///
    /// An empty `handles` slice is a no-op that leaves the existing list
    /// untouched. In name mode the first handle is added by resolved name to
    /// fix the mode, then the rest follow naturally; in GUID mode every
    /// handle resolves to its GUID. Handles the catalog cannot resolve are
    /// dropped.
    pub fn set_asset_references<C: AssetCatalog>(
        &mut self,
        mode: ReferenceMode,
        catalog: &C,
        handles: &[C::Handle],
    ) {
        if handles.is_empty() {
            return;
        }
        self.document.references.clear();
        let mut rest = handles;
        if mode == ReferenceMode::AssemblyName {
            if let Some(identity) = catalog.identity(&handles[0]) {
                self.add_reference_by_name(&identity.name);
            }
            rest = &handles[1..];
        }
        for handle in rest {
            self.add_asset_reference(catalog, handle);
        }
    }

    // Platform selection. Include and exclude are mutually exclusive in the
    // document; the empty/empty state means unrestricted.

    /// Restrict the assembly to exactly the platforms in `platforms`.
    ///
    /// Clears both platform sets first.
    pub fn set_include_platforms(&mut self, platforms: Platforms) {
        self.document.include_platforms.clear();
        self.document.exclude_platforms.clear();
        self.document
            .include_platforms
            .extend(platforms.wire_names().iter().map(|name| name.to_string()));
    }

    /// Keep the assembly off every platform in `platforms`.
    ///
    /// Clears both platform sets first.
    pub fn set_exclude_platforms(&mut self, platforms: Platforms) {
        self.document.include_platforms.clear();
        self.document.exclude_platforms.clear();
        self.document
            .exclude_platforms
            .extend(platforms.wire_names().iter().map(|name| name.to_string()));
    }

    /// Whether every platform in `platforms` survives the current
    /// include/exclude selection.
    ///
    /// Both sets empty means unrestricted. Both sets populated at once can
    /// only come from an externally authored document; the violation is
    /// logged and answered with a conservative `false`.
    pub fn are_platforms_included(&self, platforms: Platforms) -> bool {
        let include = &self.document.include_platforms;
        let exclude = &self.document.exclude_platforms;
        if include.is_empty() && exclude.is_empty() {
            return true;
        }
        if !include.is_empty() && !exclude.is_empty() {
            tracing::error!(
                assembly = %self.document.name,
                "both includePlatforms and excludePlatforms are set"
            );
            return false;
        }
        if !include.is_empty() {
            return platforms.iter().all(|platform| {
                platform
                    .wire_name()
                    .map_or(false, |name| include.iter().any(|included| included == name))
            });
        }
        platforms.iter().all(|platform| {
            platform
                .wire_name()
                .map_or(true, |name| !exclude.iter().any(|excluded| excluded == name))
        })
    }

    // Version defines. Names are not deduplicated on insertion; removal
    // takes every entry sharing the name.

    /// Serialize `define` and append it as a new entry
    pub fn add_version_define(&mut self, define: &VersionDefine) -> AsmeditResult<()> {
        let entry = define.to_text()?;
        self.document.version_defines.push(entry);
        Ok(())
    }

    /// Remove every well-formed entry whose name is `name`.
    ///
    /// Entries that fail to parse cannot match and are kept.
    pub fn remove_version_define(&mut self, name: &str) {
        self.document.version_defines.retain(|entry| {
            VersionDefine::from_text(entry).map_or(true, |define| define.name != name)
        });
    }

    /// Deserialize every stored version define.
    ///
    /// One malformed entry fails the whole listing.
    pub fn version_defines(&self) -> AsmeditResult<Vec<VersionDefine>> {
        self.document
            .version_defines
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                serde_json::from_str(entry)
                    .map_err(|source| AsmeditError::MalformedVersionDefine { index, source })
            })
            .collect()
    }

    /// Serialize the current in-memory state
    pub fn current_text(&self) -> AsmeditResult<String> {
        self.document.to_text()
    }

    /// Write the current text through `store` at the held location.
    ///
    /// When `reimport` is set, fires the store's change notification after a
    /// successful write.
    pub fn save(&self, store: &impl DefinitionStore, reimport: bool) -> AsmeditResult<()> {
        let text = self.current_text()?;
        store.write(&self.location, &text)?;
        if reimport {
            store.notify_changed(&self.location);
        }
        Ok(())
    }
}
