//! Provider construction and failure-path tests. HTTP behaviour runs against
//! a one-shot local server; nothing reaches the network.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use serde_json::json;

use vibes_core::config::EmbeddingConfig;
use vibes_core::errors::{EmbeddingError, VibesError};
use vibes_core::traits::IEmbeddingProvider;
use vibes_embeddings::{create_provider, ApiProvider, HashingEmbedder};

static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Nothing listens on the discard port locally, so connections are refused.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:9/v1/embeddings";

fn config(provider: &str) -> EmbeddingConfig {
    EmbeddingConfig {
        provider: provider.to_string(),
        endpoint: DEAD_ENDPOINT.to_string(),
        ollama_url: "http://127.0.0.1:9".to_string(),
        api_key_env: "VIBES_TEST_EMBEDDING_KEY".to_string(),
        dimensions: 48,
        timeout_secs: 2,
        ..EmbeddingConfig::default()
    }
}

#[test]
fn hashing_provider_is_standalone() {
    let provider = create_provider(&config("hashing")).unwrap();
    assert_eq!(provider.name(), "hashing");
    assert_eq!(provider.dimensions(), 48);
}

#[test]
fn unknown_provider_is_config_error() {
    let err = create_provider(&config("onnx")).err().unwrap();
    assert!(matches!(err, VibesError::ConfigError(_)));
}

#[test]
fn missing_api_key_falls_back_to_hashing() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("VIBES_TEST_EMBEDDING_KEY");
    let provider = create_provider(&config("api")).unwrap();
    let v = provider.embed("crafting feels deep").unwrap();
    assert_eq!(v.len(), 48);
}

#[test]
fn missing_api_key_without_fallback_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("VIBES_TEST_EMBEDDING_KEY");
    let cfg = EmbeddingConfig {
        hashing_fallback: false,
        ..config("api")
    };
    let err = create_provider(&cfg).err().unwrap();
    assert!(matches!(err, VibesError::ConfigError(_)));
}

/// Answer one connection per canned `(status, body)`, in order. The handle
/// yields the request bodies the server received.
fn stub_server(replies: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/v1/embeddings", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let mut received = Vec::new();
        for (status, body) in replies {
            let (mut stream, _) = listener.accept().unwrap();
            received.push(read_request_body(&mut stream));
            let response = format!(
                "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        }
        received
    });
    (url, handle)
}

fn read_request_body(stream: &mut TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut content_length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        if line.trim_end().is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
    }
    let mut body = vec![0; content_length];
    reader.read_exact(&mut body).unwrap();
    String::from_utf8(body).unwrap()
}

fn embeddings_body(dims: usize) -> String {
    json!({ "data": [{ "index": 0, "embedding": vec![0.125_f32; dims] }] }).to_string()
}

fn api_at(endpoint: &str) -> ApiProvider {
    let cfg = EmbeddingConfig {
        endpoint: endpoint.to_string(),
        ..config("api")
    };
    ApiProvider::new(&cfg, "test-key".to_string()).unwrap()
}

#[test]
fn unreachable_api_fails_without_going_unavailable() {
    let provider = ApiProvider::new(&config("api"), "test-key".to_string()).unwrap();
    let err = provider
        .embed_batch(&["servers are laggy".to_string()])
        .unwrap_err();
    assert!(matches!(
        err,
        VibesError::EmbeddingError(EmbeddingError::InferenceFailed { .. })
            | VibesError::EmbeddingError(EmbeddingError::Timeout { .. })
    ));
    assert!(provider.is_available());
}

#[test]
fn api_recovers_on_the_next_request_after_a_failure() {
    let (url, server) = stub_server(vec![
        (500, r#"{"error":"overloaded"}"#.to_string()),
        (200, embeddings_body(48)),
    ]);
    let provider = api_at(&url);
    let texts = vec!["matchmaking is slow".to_string()];

    assert!(provider.embed_batch(&texts).is_err());
    let vectors = provider.embed_batch(&texts).unwrap();
    assert_eq!(vectors.len(), 1);
    assert_eq!(vectors[0].len(), 48);

    let requests = server.join().unwrap();
    assert_eq!(requests.len(), 2);
    assert!(requests[1].contains(r#""dimensions":48"#));
}

#[test]
fn wrong_length_embedding_is_dimension_mismatch() {
    let (url, server) = stub_server(vec![(200, embeddings_body(1536))]);
    let provider = api_at(&url);

    let err = provider.embed("crafting feels deep").unwrap_err();
    assert!(matches!(
        err,
        VibesError::EmbeddingError(EmbeddingError::DimensionMismatch {
            expected: 48,
            actual: 1536
        })
    ));
    server.join().unwrap();
}

#[test]
fn unreachable_ollama_chain_serves_from_hashing() {
    let provider = create_provider(&config("ollama")).unwrap();
    let texts = vec!["a fine soundtrack".to_string(), "dull quests".to_string()];
    let out = provider.embed_batch(&texts).unwrap();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], HashingEmbedder::new(48).embed(&texts[0]).unwrap());
}

#[test]
fn empty_batch_short_circuits() {
    let provider = ApiProvider::new(&config("api"), "k".to_string()).unwrap();
    assert!(provider.embed_batch(&[]).unwrap().is_empty());
}
