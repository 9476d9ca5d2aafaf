// resub-core/src/replacer.rs
//! The single-pass replacement engine.
//!
//! A [`Replacer`] scans a subject string left to right and substitutes a
//! literal replacement for every non-overlapping match of its pattern,
//! building the result in an output buffer that is grown before each
//! write that could exceed its capacity.

use anyhow::Result;
use log::debug;

use crate::compiler::{compile_pattern, CompiledPattern};
use crate::errors::ResubError;

/// Applies a compiled pattern to subject strings.
#[derive(Debug, Clone)]
pub struct Replacer {
    pattern: CompiledPattern,
}

impl Replacer {
    /// Compiles `pattern` and returns a `Replacer` ready for use.
    pub fn new(pattern: &str) -> Result<Self, ResubError> {
        Ok(Self {
            pattern: compile_pattern(pattern)?,
        })
    }

    /// Returns the compiled pattern backing this replacer.
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Replaces every non-overlapping match of the pattern in `subject`
    /// with `replacement`.
    ///
    /// The subject is consumed through a cursor that only moves forward.
    /// Each round searches the remainder of the subject, then copies the
    /// unmatched prefix followed by the replacement into the output. A
    /// zero-width match additionally copies the character at the match
    /// position so the cursor always advances; a zero-width match with no
    /// character left ends the scan.
    ///
    /// Because the search restarts on the remainder each round, `^`
    /// re-anchors at the cursor rather than at the start of the original
    /// subject.
    pub fn replace(&self, subject: &str, replacement: &str) -> Result<String, ResubError> {
        let mut output = String::new();
        output.try_reserve(subject.len() + 1)?;

        let mut cursor = 0;
        while let Some(found) = self.pattern.regex.find(&subject[cursor..]) {
            let rest = &subject[cursor..];
            let prefix = &rest[..found.start()];

            output.try_reserve(prefix.len() + replacement.len() + 1)?;
            output.push_str(prefix);
            output.push_str(replacement);

            if found.is_empty() {
                // Match offsets are always char boundaries, so forward
                // progress is one whole character.
                let Some(ch) = rest[found.end()..].chars().next() else {
                    break;
                };
                output.try_reserve(ch.len_utf8() + 1)?;
                output.push(ch);
                cursor += found.end() + ch.len_utf8();
            } else {
                cursor += found.end();
            }
        }

        let tail = &subject[cursor..];
        output.try_reserve(tail.len())?;
        output.push_str(tail);

        debug!(
            "Subject scanned. Original length: {}, result length: {}",
            subject.len(),
            output.len()
        );

        Ok(output)
    }
}

/// Replaces every match of `pattern` in `subject` with `replacement` in a
/// single call. This function is the primary entry point for one-shot use.
///
/// # Arguments
///
/// * `pattern` - The regular expression to search for.
/// * `subject` - The string to scan.
/// * `replacement` - The literal text substituted for each match.
pub fn replace(pattern: &str, subject: &str, replacement: &str) -> Result<String> {
    let replacer = Replacer::new(pattern)?;
    let result = replacer.replace(subject, replacement)?;
    Ok(result)
}
