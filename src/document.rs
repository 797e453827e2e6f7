//! Document model for assembly definitions
//!
//! Defines the serializable records behind one `.asmdef` file:
//! - `AssemblyDocument`: the full definition record
//! - `VersionDefine`: one conditional compile-define rule
//!
//! Parsing accepts any well-formed JSON object and defaults absent fields;
//! semantic invariants (platform-set exclusivity, reference addressing mode)
//! are enforced by [`EditableAssembly`](crate::assembly::EditableAssembly),
//! not here.

use serde::{Deserialize, Serialize};

use crate::error::{AsmeditError, AsmeditResult};

/// One assembly definition record, field-for-field as stored on disk.
///
/// Wire field names are camelCase. Every field is optional on input and
/// always present on output, so `from_text(to_text(d))` reproduces `d`
/// exactly, empty sequences and empty strings included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct AssemblyDocument {
    /// Assembly name declared by this definition
    pub name: String,

    /// Root namespace for scripts compiled into the assembly
    pub root_namespace: String,

    /// Referenced assemblies, either all `GUID:`-tagged or all plain names
    pub references: Vec<String>,

    /// Platforms the assembly is restricted to (wire names)
    pub include_platforms: Vec<String>,

    /// Platforms the assembly is kept off of (wire names)
    pub exclude_platforms: Vec<String>,

    /// Whether `unsafe` code is allowed
    pub allow_unsafe_code: bool,

    /// Whether the precompiled reference list overrides the default set
    pub override_references: bool,

    /// Precompiled (DLL) references
    pub precompiled_references: Vec<String>,

    /// Whether other assemblies reference this one automatically
    pub auto_referenced: bool,

    /// Defines that must be set for the assembly to compile
    pub define_constraints: Vec<String>,

    /// Version define rules, each entry an independently serialized
    /// [`VersionDefine`]
    pub version_defines: Vec<String>,

    /// Whether engine assemblies are kept out of the reference set
    pub no_engine_references: bool,
}

impl AssemblyDocument {
    /// Parse definition text into a typed record.
    ///
    /// Unknown fields are ignored; absent fields take their defaults.
    pub fn from_text(text: &str) -> AsmeditResult<Self> {
        serde_json::from_str(text).map_err(AsmeditError::MalformedDocument)
    }

    /// Serialize the record to pretty-printed definition text.
    pub fn to_text(&self) -> AsmeditResult<String> {
        serde_json::to_string_pretty(self).map_err(AsmeditError::Serialize)
    }
}

/// A named conditional compile-define rule.
///
/// `define` becomes active when the dependency named `name` has a version
/// matching `expression`. Stored inside `AssemblyDocument::version_defines`
/// as its own serialized entry, so each rule round-trips independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VersionDefine {
    /// Name of the dependency the rule watches
    pub name: String,

    /// Version-comparison expression, e.g. `[1.3,3.4.1]` or `1.2.x`
    pub expression: String,

    /// Symbol defined while the expression matches
    pub define: String,
}

impl VersionDefine {
    /// Create a rule from its three parts
    pub fn new(
        name: impl Into<String>,
        expression: impl Into<String>,
        define: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expression: expression.into(),
            define: define.into(),
        }
    }

    /// Parse one stored entry
    pub fn from_text(text: &str) -> AsmeditResult<Self> {
        serde_json::from_str(text).map_err(AsmeditError::MalformedDocument)
    }

    /// Serialize into the compact entry form stored in a document
    pub fn to_text(&self) -> AsmeditResult<String> {
        serde_json::to_string(self).map_err(AsmeditError::Serialize)
    }
}
