//! Shared type definitions for the amalgam crate
//!
//! This module contains the types passed between the resolver and the emitter,
//! so neither component has to depend on the other.

use std::path::PathBuf;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered hash set using the fast `rustc-hash` hasher
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// Ordered, exact-text-unique set of external include targets (e.g. `<vector>`)
pub type ExternalIncludeSet = FxIndexSet<String>;

/// Classification of an include directive based on how its target is delimited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludeKind {
    /// Quote-delimited target that lives in the tree and gets inlined
    Local,

    /// Angle-bracket (or otherwise non-quoted) target that is hoisted to the top
    External,
}

impl IncludeKind {
    /// Check if this include is inlined into the output
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local)
    }

    /// Check if this include is collected into the external block
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External)
    }
}

impl std::fmt::Display for IncludeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::External => write!(f, "external"),
        }
    }
}

/// A single `#include` line, parsed but not yet acted upon
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    /// Target token exactly as written, delimiters included
    pub target: String,
    pub kind: IncludeKind,
}

impl IncludeDirective {
    /// Path of a local include with its quotes stripped
    ///
    /// Returns `None` for external includes.
    pub fn local_path(&self) -> Option<&str> {
        if self.kind.is_local() {
            self.target
                .strip_prefix('"')
                .and_then(|rest| rest.strip_suffix('"'))
        } else {
            None
        }
    }
}

/// Result of walking an include tree from a single root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Amalgamation {
    /// Flattened body lines, without line terminators
    pub body: Vec<String>,
    /// External include targets in first-discovery order
    pub externals: ExternalIncludeSet,
    /// Every file that was inlined, in visit order
    pub sources: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_path_strips_quotes() {
        let directive = IncludeDirective {
            target: "\"sub/util.h\"".to_owned(),
            kind: IncludeKind::Local,
        };
        assert_eq!(directive.local_path(), Some("sub/util.h"));
    }

    #[test]
    fn test_external_has_no_local_path() {
        let directive = IncludeDirective {
            target: "<vector>".to_owned(),
            kind: IncludeKind::External,
        };
        assert_eq!(directive.local_path(), None);
        assert!(directive.kind.is_external());
        assert_eq!(directive.kind.to_string(), "external");
    }
}
