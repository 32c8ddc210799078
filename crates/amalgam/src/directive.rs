//! Line classification for C/C++ sources
//!
//! Every line of an inlined file is one of three things: a `#pragma once` guard
//! (dropped), an `#include` directive (inlined or hoisted), or plain text that is
//! copied through. Parsing is deliberately shallow: no preprocessor state is kept,
//! and anything that does not look exactly like an include is plain text.

use crate::types::{IncludeDirective, IncludeKind};

pub const GUARD_PRAGMA: &str = "#pragma once";

const INCLUDE_KEYWORD: &str = "#include";

/// Check if a line is a per-file include guard
pub fn is_guard_pragma(line: &str) -> bool {
    line.trim() == GUARD_PRAGMA
}

/// Try to read `line` as an include directive
///
/// The keyword must start the line. Indented includes usually sit inside
/// conditional blocks and are left in place.
pub fn parse_include(line: &str) -> Option<IncludeDirective> {
    if !line.starts_with(INCLUDE_KEYWORD) {
        return None;
    }

    let mut tokens = line.split_whitespace();
    if tokens.next()? != INCLUDE_KEYWORD {
        return None;
    }
    let target = tokens.next()?;

    let kind = if target.starts_with('"') {
        if target.len() < 3 || !target.ends_with('"') {
            return None;
        }
        IncludeKind::Local
    } else {
        IncludeKind::External
    };

    Some(IncludeDirective {
        target: target.to_owned(),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_pragma() {
        assert!(is_guard_pragma("#pragma once"));
        assert!(is_guard_pragma("  #pragma once\t"));
        assert!(!is_guard_pragma("#pragma pack(1)"));
        assert!(!is_guard_pragma("// #pragma once"));
    }

    #[test]
    fn test_local_include() {
        let directive = parse_include("#include \"util.h\"").unwrap();
        assert_eq!(directive.kind, IncludeKind::Local);
        assert_eq!(directive.local_path(), Some("util.h"));
    }

    #[test]
    fn test_external_include() {
        let directive = parse_include("#include <vector>").unwrap();
        assert_eq!(directive.kind, IncludeKind::External);
        assert_eq!(directive.target, "<vector>");
    }

    #[test]
    fn test_trailing_comment_ignored() {
        let directive = parse_include("#include <intrin.h> // MSVS breakpoint").unwrap();
        assert_eq!(directive.target, "<intrin.h>");

        let directive = parse_include("#include\t\"a/b.hpp\"   // local").unwrap();
        assert_eq!(directive.local_path(), Some("a/b.hpp"));
    }

    #[test]
    fn test_not_includes() {
        for line in [
            "",
            "int x;",
            "#include",
            "#include   ",
            "# include <vector>",
            "//#include \"puro.hpp\"",
            "    #include <Windows.h>",
            "#includes <vector>",
            "#include_next <vector>",
            "#include \"\"",
            "#include \"unterminated.h",
        ] {
            assert_eq!(parse_include(line), None, "{line:?} should pass through");
        }
    }
}
