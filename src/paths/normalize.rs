//! Lexical path normalizer: raw CLI path → normalized absolute path.
//!
//! Normalization never touches the filesystem and never fails. The working
//! directory passed in is expected to be symlink-free already (see
//! [`crate::paths::weakly_canonical`]), so `..` segments are resolved purely
//! lexically against it.

use std::fmt;
use std::path::PathBuf;

/// Lexical rules of a platform's native path syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathStyle {
    /// `/` is the only separator; `\` and `:` are ordinary characters.
    Posix,
    /// `/` and `\` both separate; `X:` introduces a drive root.
    Windows,
}

impl PathStyle {
    /// Style of the host the binary was compiled for.
    pub fn native() -> Self {
        if cfg!(windows) {
            PathStyle::Windows
        } else {
            PathStyle::Posix
        }
    }

    fn is_separator(self, c: char) -> bool {
        match self {
            PathStyle::Posix => c == '/',
            PathStyle::Windows => c == '/' || c == '\\',
        }
    }
}

/// Root component of a normalized path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    /// Relative path.
    None,
    /// A single leading separator.
    Slash,
    /// Exactly two leading separators (`//host/...`).
    Unc,
    /// Drive letter such as `C:` (Windows style only).
    Drive(String),
}

impl Root {
    fn matches(&self, other: &Root) -> bool {
        match (self, other) {
            (Root::Drive(a), Root::Drive(b)) => a.eq_ignore_ascii_case(b),
            (a, b) => a == b,
        }
    }
}

/// A lexically normalized path: no `.` segments, no redundant separators and,
/// for rooted paths, no `..` segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexicalPath {
    root: Root,
    segments: Vec<String>,
    trailing_slash: bool,
}

impl LexicalPath {
    /// Normalize `raw` without resolving it against anything.
    pub fn parse(raw: &str, style: PathStyle) -> Self {
        let (root, rest) = split_root(raw, style);
        let mut path = LexicalPath {
            root,
            segments: Vec::new(),
            trailing_slash: false,
        };
        path.push_raw(rest, style);
        path
    }

    /// Normalize `raw` and make it absolute by prepending `work_dir` when it has
    /// no root of its own. An empty `raw` yields the working directory.
    pub fn absolute(raw: &str, work_dir: &LexicalPath, style: PathStyle) -> Self {
        let (root, rest) = split_root(raw, style);
        if root != Root::None {
            let mut path = LexicalPath::parse(raw, style);
            // `\x` on Windows is rooted on the working directory's drive.
            if style == PathStyle::Windows && path.root == Root::Slash {
                if let Root::Drive(drive) = &work_dir.root {
                    path.root = Root::Drive(drive.clone());
                }
            }
            return path;
        }

        let mut path = work_dir.clone();
        if !rest.is_empty() {
            path.push_raw(rest, style);
        }
        path
    }

    /// Append raw relative text, resolving `.` and `..` as we go.
    fn push_raw(&mut self, raw: &str, style: PathStyle) {
        let mut last = "";
        for segment in raw.split(|c| style.is_separator(c)) {
            last = segment;
            match segment {
                "" | "." => {}
                ".." => self.pop_segment(),
                _ => self.segments.push(segment.to_string()),
            }
        }

        let ends_with_separator = raw.chars().last().is_some_and(|c| style.is_separator(c));
        self.trailing_slash =
            !self.segments.is_empty() && (ends_with_separator || last == "." || last == "..");
    }

    fn pop_segment(&mut self) {
        match self.segments.last() {
            Some(last) if last != ".." => {
                self.segments.pop();
            }
            // Going above a root is a no-op.
            _ if self.is_absolute() => {}
            _ => self.segments.push("..".to_string()),
        }
    }

    pub fn root(&self) -> &Root {
        &self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn has_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    pub fn is_absolute(&self) -> bool {
        self.root != Root::None
    }

    /// Strip `prefix` if it is a whole-segment ancestor of (or equal to) this
    /// path. The result is relative; stripping an equal path yields `.`.
    pub fn strip_prefix(&self, prefix: &LexicalPath) -> Option<LexicalPath> {
        if !self.root.matches(&prefix.root) || !self.segments.starts_with(&prefix.segments) {
            return None;
        }

        let segments: Vec<String> = self.segments[prefix.segments.len()..].to_vec();
        Some(LexicalPath {
            root: Root::None,
            trailing_slash: self.trailing_slash && !segments.is_empty(),
            segments,
        })
    }

    /// Text of the path after the root, `/`-separated.
    pub fn relative_text(&self) -> String {
        let mut text = self.segments.join("/");
        if self.trailing_slash {
            text.push('/');
        }
        text
    }

    /// Native path for filesystem access.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(self.to_string())
    }
}

impl fmt::Display for LexicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Root::None if self.segments.is_empty() => return f.write_str("."),
            Root::None => {}
            Root::Slash => f.write_str("/")?,
            Root::Unc => f.write_str("//")?,
            Root::Drive(drive) => write!(f, "{drive}/")?,
        }
        f.write_str(&self.relative_text())
    }
}

/// Split the root off `raw`, returning the root and the remaining text.
fn split_root(raw: &str, style: PathStyle) -> (Root, &str) {
    if style == PathStyle::Windows {
        let bytes = raw.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            return (Root::Drive(raw[..2].to_string()), &raw[2..]);
        }
    }

    let leading = raw.chars().take_while(|&c| style.is_separator(c)).count();
    match leading {
        0 => (Root::None, raw),
        // Separators are single-byte, so counting chars is counting bytes.
        2 => (Root::Unc, &raw[2..]),
        n => (Root::Slash, &raw[n..]),
    }
}

/// Normalize a CLI path against a working directory.
pub fn normalize_cli_path(raw: &str, work_dir: &LexicalPath, style: PathStyle) -> LexicalPath {
    LexicalPath::absolute(raw, work_dir, style)
}
