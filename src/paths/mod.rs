//! Path handling for command-line inputs.
//!
//! ```text
//! CLI path → Normalize → Virtual root → Source unit name
//!          ↘ (loaded files only) Canonicalize → Allowed directories
//! ```
//!
//! Naming is purely lexical; only the sandbox looks through symlinks.

mod allowed;
mod fs;
mod naming;
mod normalize;
mod vroot;

pub use allowed::AllowedDirectories;
pub use fs::{weakly_canonical, EntryKind, FileSystem, OsFileSystem};
pub use naming::{SourceUnitNamer, STDIN_SOURCE_NAME};
pub use normalize::{normalize_cli_path, LexicalPath, PathStyle, Root};
pub use vroot::to_virtual_root;
