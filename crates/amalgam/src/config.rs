use std::path::Path;

/// Default limit on local include nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Extensions that make an output file a header under [`GuardPolicy::Auto`]
const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx"];

/// When to put a `#pragma once` at the top of the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum GuardPolicy {
    /// Only when the output path has a header extension
    #[default]
    Auto,
    Always,
    Never,
}

impl GuardPolicy {
    /// Decide whether a guard is emitted for `output`
    pub fn applies_to(self, output: &Path) -> bool {
        match self {
            Self::Auto => is_header_path(output),
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Check whether `path` has a C/C++ header extension
pub fn is_header_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            HEADER_EXTENSIONS
                .iter()
                .any(|header| ext.eq_ignore_ascii_case(header))
        })
}

/// Knobs for a single amalgamation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub guard: GuardPolicy,
    /// Deepest allowed chain of nested local includes
    pub max_depth: usize,
    /// Inline a file that carried `#pragma once` only the first time it is included
    pub dedup_guarded: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            guard: GuardPolicy::Auto,
            max_depth: DEFAULT_MAX_DEPTH,
            dedup_guarded: false,
        }
    }
}
