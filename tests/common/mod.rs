#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use contactd::config::Config;
use contactd::models::Submission;
use contactd::store::{JsonFileStore, StorageError, SubmissionStore};

/// A running test server writing to its own scratch directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub dir: PathBuf,
    pub data_path: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON contact payload, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit a form-urlencoded contact payload, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Every record currently in the store file (empty if it was never created).
    pub fn stored(&self) -> Vec<Submission> {
        read_store(&self.data_path)
    }
}

pub fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("contactd_test_{}", Uuid::now_v7().simple()));
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}

pub fn read_store(path: &std::path::Path) -> Vec<Submission> {
    match std::fs::read(path) {
        Ok(raw) => serde_json::from_slice(&raw).expect("store file is not a submission array"),
        Err(_) => Vec::new(),
    }
}

pub fn test_config(dir: &std::path::Path) -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        data_path: dir.join("data").join("contact-submissions.json"),
        static_dir: Some(dir.join("public")),
        max_body_size: 16 * 1024,
        log_level: "warn".to_string(),
    }
}

/// Spawn a test app backed by a JSON file store in a fresh scratch directory.
pub async fn spawn_app() -> TestApp {
    let dir = scratch_dir();
    let config = test_config(&dir);
    spawn_with(dir, config).await
}

pub async fn spawn_with(dir: PathBuf, config: Config) -> TestApp {
    let data_path = config.data_path.clone();
    let store = Arc::new(JsonFileStore::new(data_path.clone()));
    let app = contactd::build_app(config, store);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        dir,
        data_path,
    }
}

/// Remove the scratch directory after a test completes.
pub fn cleanup(app: TestApp) {
    let _ = std::fs::remove_dir_all(&app.dir);
}

/// In-memory store that records how often it was asked to append.
#[derive(Default)]
pub struct CountingStore {
    pub appends: AtomicUsize,
    pub records: tokio::sync::Mutex<Vec<Submission>>,
    pub fail: bool,
}

impl CountingStore {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn append_count(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionStore for CountingStore {
    async fn append(&self, submission: &Submission) -> Result<(), StorageError> {
        self.appends.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StorageError::Io(std::io::Error::other("disk unavailable")));
        }
        self.records.lock().await.push(submission.clone());
        Ok(())
    }
}

pub fn valid_payload() -> Value {
    json!({
        "name": "Arindam Patil",
        "email": "a@b.com",
        "message": "Hello there, this is a test message."
    })
}
