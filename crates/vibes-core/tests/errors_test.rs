//! Error conversion and display tests.

use vibes_core::errors::{AnalysisError, ConfigError, EmbeddingError, GenerationError};
use vibes_core::VibesError;

#[test]
fn subsystem_errors_convert_into_vibes_error() {
    let err: VibesError = EmbeddingError::DimensionMismatch {
        expected: 384,
        actual: 3,
    }
    .into();
    assert!(matches!(err, VibesError::EmbeddingError(_)));

    let err: VibesError = GenerationError::BadStatus {
        status: 429,
        body: "rate limited".into(),
    }
    .into();
    assert!(err.to_string().contains("429"));

    let err: VibesError = AnalysisError::EmptyVocabulary.into();
    assert!(matches!(err, VibesError::AnalysisError(_)));

    let err: VibesError = ConfigError::MissingCredential {
        var: "OPENROUTER_API_KEY".into(),
    }
    .into();
    assert!(err.to_string().contains("OPENROUTER_API_KEY"));
}

#[test]
fn question_mark_propagates() {
    fn inner() -> vibes_core::VibesResult<()> {
        Err(GenerationError::Timeout {
            provider: "chat".into(),
            secs: 15,
        })?
    }
    let err = inner().unwrap_err();
    assert!(matches!(err, VibesError::GenerationError(_)));
}

#[test]
fn services_unreachable_reports_attempts() {
    let err = VibesError::ServicesUnreachable { attempted: 6 };
    assert!(err.to_string().contains('6'));
}
