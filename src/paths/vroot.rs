//! Virtual root mapper: native absolute path → portable `/`-rooted name.

use crate::paths::normalize::{LexicalPath, Root};

/// Map a normalized absolute path into the portable naming space.
///
/// - `/a/b` stays `/a/b`.
/// - `//host/a` keeps its double slash.
/// - `C:/a/b` becomes `/a/b` when the working directory is on drive `C:`,
///   and `/C:/a/b` otherwise, so names from different drives never collide.
pub fn to_virtual_root(path: &LexicalPath, work_dir: &LexicalPath) -> String {
    match path.root() {
        Root::Slash => format!("/{}", path.relative_text()),
        Root::Unc => format!("//{}", path.relative_text()),
        Root::Drive(drive) => match work_dir.root() {
            Root::Drive(work_drive) if work_drive.eq_ignore_ascii_case(drive) => {
                format!("/{}", path.relative_text())
            }
            _ => format!("/{}/{}", drive, path.relative_text()),
        },
        Root::None => path.to_string(),
    }
}
