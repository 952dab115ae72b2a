//! Property tests for response cleaning and the vagueness gate.

use proptest::prelude::*;
use vibes_core::models::Polarity;
use vibes_core::Lexicon;
use vibes_generation::gates::check;
use vibes_generation::postprocess::clean_response;
use vibes_generation::RejectionReason;

fn phrase() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{1,8}", 1..6).prop_map(|words| words.join(" "))
}

proptest! {
    #[test]
    fn output_is_single_spaced_and_trimmed(raw in "\\PC{0,80}") {
        let cleaned = clean_response(&raw);
        prop_assert_eq!(cleaned.trim(), cleaned.as_str());
        prop_assert!(!cleaned.contains("  "));
        prop_assert!(!cleaned.chars().any(|c| c.is_whitespace() && c != ' '));
    }

    #[test]
    fn decorations_are_stripped(
        body in phrase(),
        bullet in prop_oneof![Just(""), Just("- "), Just("* "), Just("• ")],
        quote in prop_oneof![Just(""), Just("\""), Just("'")],
        period in prop_oneof![Just(""), Just("."), Just("...")],
        tail in prop_oneof![Just(""), Just("\nSecond line")],
    ) {
        let raw = format!("{bullet}{quote}{body}{period}{quote}{tail}");
        prop_assert_eq!(clean_response(&raw), body);
    }

    #[test]
    fn text_after_spaced_dash_is_dropped(head in phrase(), rest in phrase()) {
        prop_assert_eq!(clean_response(&format!("{head} - {rest}")), head);
    }

    #[test]
    fn vague_phrases_are_always_rejected(prefix in phrase(), suffix in phrase()) {
        let lexicon = Lexicon::default();
        let text = format!("{prefix} not worth {suffix}");
        for polarity in [Polarity::Positive, Polarity::Negative] {
            prop_assert_eq!(check(&text, polarity, &lexicon), Err(RejectionReason::Vague));
        }
    }
}
