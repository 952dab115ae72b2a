use crate::errors::VibesResult;

/// Text generation provider (chat/completions style LLM endpoint).
///
/// Calls are attempted once; retry policy belongs to the caller.
pub trait IGenerationProvider: Send + Sync {
    /// Generate a completion for `prompt`.
    fn generate(&self, prompt: &str, max_output_tokens: u32, temperature: f32)
        -> VibesResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
