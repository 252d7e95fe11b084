//! Import remapping parser: `[context:]prefix=target`.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single import remapping, stored exactly as written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Remapping {
    pub context: String,
    pub prefix: String,
    pub target: String,
}

impl Remapping {
    /// Whether a positional token should be treated as a remapping.
    pub fn is_remapping(token: &str) -> bool {
        token != "-" && token.contains('=')
    }

    /// Parse a remapping token. Returns `None` when there is no `=` or the
    /// prefix is empty.
    pub fn parse(token: &str) -> Option<Self> {
        let (head, target) = token.split_once('=')?;
        let (context, prefix) = match head.split_once(':') {
            Some((context, prefix)) => (context, prefix),
            None => ("", head),
        };

        if prefix.is_empty() {
            return None;
        }

        Some(Self {
            context: context.to_string(),
            prefix: prefix.to_string(),
            target: target.to_string(),
        })
    }

    /// Directory part of the target, used as an extra sandbox entry.
    ///
    /// `b/c/d` → `b/c`, `c/d/e/` → `c/d/e`, `x` → `.`; `None` for an empty target.
    /// A target whose last segment is `..` already names a directory and is
    /// kept whole.
    pub fn target_directory(&self) -> Option<PathBuf> {
        if self.target.is_empty() {
            return None;
        }
        if self.target.rsplit('/').next() == Some("..") {
            return Some(PathBuf::from(&self.target));
        }
        let dir = match self.target.rfind('/') {
            Some(0) => "/",
            Some(index) => &self.target[..index],
            None => ".",
        };
        Some(PathBuf::from(dir))
    }
}

impl fmt::Display for Remapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.context.is_empty() {
            write!(f, "{}:", self.context)?;
        }
        write!(f, "{}={}", self.prefix, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remapping(context: &str, prefix: &str, target: &str) -> Remapping {
        Remapping {
            context: context.into(),
            prefix: prefix.into(),
            target: target.into(),
        }
    }

    #[test]
    fn parses_without_context() {
        assert_eq!(Remapping::parse("a=b/c/d"), Some(remapping("", "a", "b/c/d")));
    }

    #[test]
    fn parses_with_context() {
        assert_eq!(Remapping::parse("a:b=c/d/e/"), Some(remapping("a", "b", "c/d/e/")));
    }

    #[test]
    fn colon_after_equals_belongs_to_target() {
        assert_eq!(
            Remapping::parse("@oz=https://x/y"),
            Some(remapping("", "@oz", "https://x/y"))
        );
    }

    #[test]
    fn target_may_be_empty() {
        assert_eq!(Remapping::parse("a="), Some(remapping("", "a", "")));
    }

    #[test]
    fn empty_prefix_is_rejected() {
        assert_eq!(Remapping::parse("=b"), None);
        assert_eq!(Remapping::parse("ctx:=b"), None);
        assert_eq!(Remapping::parse("no-equals"), None);
    }

    #[test]
    fn stdin_marker_is_not_a_remapping() {
        assert!(!Remapping::is_remapping("-"));
        assert!(!Remapping::is_remapping("a/b.sol"));
        assert!(Remapping::is_remapping("a=b"));
    }

    #[test]
    fn target_directory_strips_file_name() {
        assert_eq!(
            remapping("", "a", "b/c/d").target_directory(),
            Some(PathBuf::from("b/c"))
        );
        assert_eq!(
            remapping("a", "b", "c/d/e/").target_directory(),
            Some(PathBuf::from("c/d/e"))
        );
        assert_eq!(remapping("", "a", "x").target_directory(), Some(PathBuf::from(".")));
        assert_eq!(remapping("", "a", "/x").target_directory(), Some(PathBuf::from("/")));
        assert_eq!(remapping("", "a", "").target_directory(), None);
    }

    #[test]
    fn target_directory_keeps_trailing_dot_dot() {
        assert_eq!(
            remapping("", "a", "/a/b/c/..").target_directory(),
            Some(PathBuf::from("/a/b/c/.."))
        );
        assert_eq!(remapping("", "a", "..").target_directory(), Some(PathBuf::from("..")));
        assert_eq!(
            remapping("", "a", "a/b/../c.sol").target_directory(),
            Some(PathBuf::from("a/b/.."))
        );
    }

    #[test]
    fn display_round_trips_token() {
        assert_eq!(remapping("a", "b", "c").to_string(), "a:b=c");
        assert_eq!(remapping("", "b", "c").to_string(), "b=c");
    }
}
