//! Host collaborator seams
//!
//! The core never talks to a concrete project database. Reading and writing
//! definition text, locating a definition by assembly name, signalling a
//! reimport, and resolving asset identity all go through these traits so
//! hosts (and tests) can supply their own backends.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::error::{AsmeditError, AsmeditResult};

/// Storage and lookup backend for assembly definition documents.
///
/// `location` values are opaque tags minted by the host (for [`FsStore`],
/// filesystem paths). The core carries them verbatim and never interprets
/// them.
pub trait DefinitionStore {
    /// Read the definition text stored at `location`
    fn read(&self, location: &str) -> AsmeditResult<String>;

    /// Write `text` to `location`
    fn write(&self, location: &str, text: &str) -> AsmeditResult<()>;

    /// Map an assembly name to the location of its definition
    fn resolve_location(&self, assembly_name: &str) -> Option<String>;

    /// Tell the host the definition at `location` changed and should be
    /// re-scanned. Fire-and-forget; hosts without a re-scan step ignore it.
    fn notify_changed(&self, location: &str) {
        let _ = location;
    }
}

/// Both projections of one assembly definition asset held by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetIdentity {
    /// Hex asset GUID, without the `GUID:` tag
    pub guid: String,
    /// Assembly name declared in the asset's own definition
    pub name: String,
}

impl AssetIdentity {
    /// Create an identity from its two projections
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

/// Resolves opaque host asset handles to their identity projections.
pub trait AssetCatalog {
    /// Host-specific handle for an assembly definition asset
    type Handle;

    /// Look up both projections of `handle`, if the host knows it
    fn identity(&self, handle: &Self::Handle) -> Option<AssetIdentity>;
}

/// Filesystem-backed store treating location tags as paths.
///
/// `resolve_location` always misses: mapping assembly names to paths needs a
/// project index, which is host territory.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStore;

impl FsStore {
    /// Create a new FsStore instance
    pub fn new() -> Self {
        Self
    }
}

impl DefinitionStore for FsStore {
    fn read(&self, location: &str) -> AsmeditResult<String> {
        std::fs::read_to_string(location).map_err(|source| AsmeditError::StorageRead {
            location: location.to_string(),
            source,
        })
    }

    fn write(&self, location: &str, text: &str) -> AsmeditResult<()> {
        std::fs::write(location, text).map_err(|source| AsmeditError::StorageWrite {
            location: location.to_string(),
            source,
        })
    }

    fn resolve_location(&self, _assembly_name: &str) -> Option<String> {
        None
    }

    fn notify_changed(&self, location: &str) {
        tracing::debug!(location, "definition changed; no host to reimport");
    }
}

/// In-memory store for tests and embedded tooling.
///
/// Clones share one backing map (`Arc<Mutex<_>>`), so a store handed to an
/// assembly under test can be inspected afterwards. Change notifications are
/// recorded rather than acted on.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    documents: HashMap<String, String>,
    locations: HashMap<String, String>,
    changed: Vec<String>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Put definition text at `location`
    pub fn insert(&self, location: impl Into<String>, text: impl Into<String>) {
        self.lock().documents.insert(location.into(), text.into());
    }

    /// Index `assembly_name` as living at `location`
    pub fn index(&self, assembly_name: impl Into<String>, location: impl Into<String>) {
        self.lock()
            .locations
            .insert(assembly_name.into(), location.into());
    }

    /// Current text at `location`, if any
    pub fn text(&self, location: &str) -> Option<String> {
        self.lock().documents.get(location).cloned()
    }

    /// Locations for which change notifications have fired, in order
    pub fn changed(&self) -> Vec<String> {
        self.lock().changed.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryStoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DefinitionStore for MemoryStore {
    fn read(&self, location: &str) -> AsmeditResult<String> {
        self.text(location).ok_or_else(|| AsmeditError::StorageRead {
            location: location.to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such document"),
        })
    }

    fn write(&self, location: &str, text: &str) -> AsmeditResult<()> {
        self.insert(location, text);
        Ok(())
    }

    fn resolve_location(&self, assembly_name: &str) -> Option<String> {
        self.lock().locations.get(assembly_name).cloned()
    }

    fn notify_changed(&self, location: &str) {
        self.lock().changed.push(location.to_string());
    }
}
