// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "api";
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_API_KEY_ENV: &str = "VIBES_EMBEDDING_API_KEY";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1536;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_EMBEDDING_MAX_RETRIES: u32 = 0;
pub const DEFAULT_HASHING_FALLBACK: bool = true;

// --- Generation ---
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";
pub const DEFAULT_GENERATION_MODEL: &str = "arcee-ai/trinity-large-preview:free";
pub const DEFAULT_GENERATION_API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 50;
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

// --- Normalizer ---
pub const DEFAULT_MIN_SENTENCE_CHARS: usize = 20;
pub const DEFAULT_MAX_SENTENCE_CHARS: usize = 150;
pub const DEFAULT_MIN_SENTENCE_SPACES: usize = 3;
pub const DEFAULT_MIN_ASCII_LETTER_RATIO: f64 = 0.8;

// --- Clustering ---
pub const DEFAULT_KMEANS_SEED: u64 = 42;
pub const DEFAULT_KMEANS_RESTARTS: usize = 10;
pub const DEFAULT_KMEANS_MAX_ITERATIONS: u64 = 300;
pub const DEFAULT_KMEANS_TOLERANCE: f64 = 1e-4;
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;

// --- Topics ---
pub const DEFAULT_TFIDF_MAX_FEATURES: usize = 200;
pub const DEFAULT_KEYWORDS_PER_CLUSTER: usize = 5;

// --- Pipeline ---
pub const DEFAULT_MIN_SENTENCES: usize = 4;
pub const DEFAULT_SAMPLE_SENTENCES: usize = 8;
pub const DEFAULT_SAMPLE_KEYWORDS: usize = 3;
pub const DEFAULT_MAX_PARALLEL_GENERATIONS: usize = 8;
pub const DEFAULT_PRAISED_FALLBACK: &str = "No consistent praise found.";
pub const DEFAULT_CRITICIZED_FALLBACK: &str = "No major criticisms.";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
