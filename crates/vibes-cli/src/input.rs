//! Review input: `{"positive": [..], "negative": [..]}` from a file or stdin.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Both review buckets. A missing key is an empty bucket.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewInput {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

/// Read from `path`, or from stdin when it is absent or `-`.
pub fn read_reviews(path: Option<&Path>) -> Result<ReviewInput> {
    let raw = match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display()))?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read reviews from stdin")?;
            buf
        }
    };
    parse_reviews(&raw)
}

pub fn parse_reviews(raw: &str) -> Result<ReviewInput> {
    serde_json::from_str(raw).context("reviews must be a JSON object with positive/negative arrays")
}
