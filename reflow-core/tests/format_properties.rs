//! Property tests for the paragraph reflow transformation

use proptest::prelude::*;
use reflow_core::format;

proptest! {
    /// Formatting already-formatted text changes nothing.
    #[test]
    fn format_is_idempotent(input in "[a-z A-Z.!?\t\n]{0,300}") {
        let once = format(&input);
        let twice = format(&once);
        prop_assert_eq!(&twice, &once);
    }

    /// No paragraph ever holds more than three sentences. Sentences cannot
    /// contain `.`, so periods per paragraph count sentences exactly.
    #[test]
    fn paragraphs_hold_at_most_three_sentences(input in "[a-z .!?]{0,300}") {
        let output = format(&input);
        for paragraph in output.split("\n\n").filter(|p| !p.is_empty()) {
            prop_assert!(paragraph.matches('.').count() <= 3);
        }
    }

    /// Output never contains raw `!`/`?`, tabs, double spaces, or stray
    /// newlines outside the blank-line paragraph separator.
    #[test]
    fn output_is_fully_normalized(input in "[a-z A-Z.!?\t\n]{0,300}") {
        let output = format(&input);
        prop_assert!(!output.contains('!'));
        prop_assert!(!output.contains('?'));
        prop_assert!(!output.contains('\t'));
        prop_assert!(!output.contains("  "));
        for paragraph in output.split("\n\n") {
            prop_assert!(!paragraph.contains('\n'));
            prop_assert_eq!(paragraph, paragraph.trim());
        }
    }

    /// The filler tokens never survive as whole words.
    #[test]
    fn filler_words_never_survive(input in "[a-z .]{0,200}") {
        let output = format(&input);
        for word in output.split([' ', '.']) {
            prop_assert_ne!(word, "uh");
            prop_assert_ne!(word, "um");
        }
    }
}
