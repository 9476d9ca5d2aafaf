//! compiler.rs - Compilation of search patterns.
//!
//! This module converts a user-supplied pattern string into a
//! `CompiledPattern` ready for matching. Compilation is bounded on both
//! pattern text length and compiled program size, so a pathological
//! pattern fails with a diagnostic instead of exhausting memory.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::errors::ResubError;

/// Maximum accepted length, in bytes, of a pattern string.
pub const MAX_PATTERN_LENGTH: usize = 4096;

/// Represents a single compiled search pattern.
///
/// This struct holds a compiled regular expression along with the original
/// pattern text it was built from, the latter kept for diagnostics.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    /// The compiled regular expression used for matching.
    pub regex: Regex,
    /// The pattern text the expression was compiled from.
    pub pattern: String,
}

/// Compiles a pattern string into a `CompiledPattern`.
///
/// The pattern supports the usual extended-regular-expression surface:
/// alternation, grouping, quantifiers, anchors and character classes. On
/// failure the engine's own diagnostic is preserved inside the returned
/// [`ResubError::PatternCompilation`].
pub fn compile_pattern(pattern: &str) -> Result<CompiledPattern, ResubError> {
    debug!("Attempting to compile pattern {:?}", pattern);

    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(ResubError::PatternLengthExceeded(
            pattern.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let regex = RegexBuilder::new(pattern)
        .size_limit(10 * (1 << 20)) // 10 MB limit for the compiled program
        .build()
        .map_err(|e| ResubError::PatternCompilation(pattern.to_string(), e))?;

    debug!("Pattern compiled successfully.");

    Ok(CompiledPattern {
        regex,
        pattern: pattern.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_a_plain_pattern() {
        let compiled = compile_pattern("[0-9]+").unwrap();
        assert_eq!(compiled.pattern, "[0-9]+");
        assert!(compiled.regex.is_match("42"));
    }

    #[test]
    fn unbalanced_group_reports_the_engine_diagnostic() {
        let err = compile_pattern("(").unwrap_err();
        assert!(matches!(err, ResubError::PatternCompilation(..)));
        let message = err.to_string();
        assert!(message.contains("Failed to compile pattern '('"), "{message}");
    }

    #[test]
    fn oversized_pattern_is_rejected_before_compilation() {
        let pattern = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = compile_pattern(&pattern).unwrap_err();
        assert!(matches!(
            err,
            ResubError::PatternLengthExceeded(len, max)
                if len == MAX_PATTERN_LENGTH + 1 && max == MAX_PATTERN_LENGTH
        ));
    }
}
