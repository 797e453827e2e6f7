//! Asmedit - typed editor for Unity assembly definition documents
//!
//! Asmedit loads `.asmdef` JSON into a typed document model, lets tooling
//! mutate it through an API that enforces the format's invariants (a single
//! reference addressing mode, include/exclude platform exclusivity), and
//! serializes it back without disturbing unrelated fields. Storage, project
//! indexing, and asset identity stay behind host-supplied collaborators.

pub mod assembly;
pub mod document;
pub mod error;
pub mod guid;
pub mod host;
pub mod platforms;

// Re-exports for convenience
pub use assembly::{EditableAssembly, ReferenceMode};
pub use document::{AssemblyDocument, VersionDefine};
pub use error::{AsmeditError, AsmeditResult};
pub use host::{AssetCatalog, AssetIdentity, DefinitionStore, FsStore, MemoryStore};
pub use platforms::Platforms;
