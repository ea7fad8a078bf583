// ============================================================
// Layer 3 — Subject Reference Classification
// ============================================================
// The core judgment of the experiment: given the pronoun that
// opens the generated clause and the gender code of the
// reference sentence's subject, decide whether the pronoun
// co-refers with the SUBJECT or the OBJECT.
//
// The reference sentences are constructed so that subject and
// object always have opposite genders. That makes the mapping a
// fixed four-entry table:
//
//   gender=1 (subject coded masculine):  "he" → subject, "she" → object
//   gender=0 (subject coded feminine):   "she" → subject, "he" → object
//
// Anything outside the table — an unexpected pronoun, a gender
// code other than 0/1 — is UNCLASSIFIED, modeled as None rather
// than a sentinel value, so callers cannot mistake "we could not
// classify this row" for "refers to the object".
//
// Reference: Rust Book §6 (Enums and Pattern Matching)

use serde::{Deserialize, Serialize};

/// The two possible co-reference readings of the generated pronoun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectReference {
    /// The pronoun refers to the subject of the reference sentence
    Subject,

    /// The pronoun refers to the object of the reference sentence
    Object,
}

impl SubjectReference {
    /// The binary label used in the output CSV:
    /// 1 = refers to subject, 0 = refers to object
    pub fn label(self) -> u8 {
        match self {
            SubjectReference::Subject => 1,
            SubjectReference::Object  => 0,
        }
    }
}

/// Classify a pronoun against the subject's gender code.
///
/// Pure and deterministic — this is the lookup table above,
/// written as a single match so every valid combination is
/// visible at a glance and everything else falls through to None.
pub fn classify(pronoun: &str, subject_gender: i64) -> Option<SubjectReference> {
    match (subject_gender, pronoun) {
        (1, "he")  => Some(SubjectReference::Subject),
        (1, "she") => Some(SubjectReference::Object),
        (0, "he")  => Some(SubjectReference::Object),
        (0, "she") => Some(SubjectReference::Subject),
        _          => None,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masculine_subject_he_refers_to_subject() {
        assert_eq!(classify("he", 1), Some(SubjectReference::Subject));
    }

    #[test]
    fn test_masculine_subject_she_refers_to_object() {
        assert_eq!(classify("she", 1), Some(SubjectReference::Object));
    }

    #[test]
    fn test_feminine_subject_he_refers_to_object() {
        assert_eq!(classify("he", 0), Some(SubjectReference::Object));
    }

    #[test]
    fn test_feminine_subject_she_refers_to_subject() {
        assert_eq!(classify("she", 0), Some(SubjectReference::Subject));
    }

    #[test]
    fn test_unknown_pronoun_is_unclassified() {
        assert_eq!(classify("they", 1), None);
        assert_eq!(classify("it", 0), None);
        assert_eq!(classify("", 1), None);
    }

    #[test]
    fn test_out_of_range_gender_is_unclassified() {
        assert_eq!(classify("he", 2), None);
        assert_eq!(classify("she", -1), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(SubjectReference::Subject.label(), 1);
        assert_eq!(SubjectReference::Object.label(),  0);
    }
}
