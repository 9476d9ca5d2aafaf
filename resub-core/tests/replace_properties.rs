// resub-core/tests/replace_properties.rs
//! Property-style integration tests for the public replace API.
//!
//! These exercise the guarantees the engine makes across assorted inputs:
//! identity when nothing matches, a bound on how many replacements a
//! zero-width pattern can insert, and termination on patterns that only
//! match the empty string.

use resub_core::{replace, Replacer};

const SUBJECTS: &[&str] = &[
    "",
    "a",
    "banana",
    "abc123def456",
    "line one\nline two",
    "héllo wörld",
    "   leading and trailing   ",
];

#[test_log::test]
fn no_match_identity_over_assorted_subjects() {
    for subject in SUBJECTS {
        let result = replace("zzz+", subject, "#").unwrap();
        assert_eq!(&result, subject, "subject {subject:?} was altered");
    }
}

#[test_log::test]
fn insertion_count_never_exceeds_character_count_plus_one() {
    for subject in SUBJECTS {
        let result = replace("x*", subject, "\u{1}").unwrap();
        let insertions = result.matches('\u{1}').count();
        assert!(
            insertions <= subject.chars().count() + 1,
            "{insertions} insertions into {subject:?}"
        );
    }
}

#[test_log::test]
fn zero_width_only_patterns_terminate_on_every_subject() {
    for subject in SUBJECTS {
        replace("", subject, "-").unwrap();
        replace("q{0}", subject, "-").unwrap();
    }
}

#[test_log::test]
fn consumed_spans_cover_disjoint_parts_of_the_subject() {
    // Every replaced digit run is disjoint, so deleting them leaves
    // exactly the non-digit characters.
    let result = replace("[0-9]+", "a1b22c333d", "").unwrap();
    assert_eq!(result, "abcd");
}

#[test_log::test]
fn growth_is_sustained_across_a_large_subject() {
    let subject = "ab".repeat(4096);
    let replacer = Replacer::new("b").unwrap();
    let result = replacer.replace(&subject, "XYZ").unwrap();
    assert_eq!(result.len(), subject.len() * 2);
    assert!(result.starts_with("aXYZaXYZ"));
    assert!(result.ends_with("aXYZ"));
}

#[test_log::test]
fn replacement_longer_than_the_subject_is_copied_whole() {
    let result = replace("ab", "ab", "0123456789").unwrap();
    assert_eq!(result, "0123456789");
}
