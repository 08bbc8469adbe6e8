use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::sync::Arc;
use std::sync::Once;
use std::thread;
use std::time::{Duration, Instant};
use stubsearch_core::config::StubsearchConfig;
use stubsearch_core::data::Dataset;
use stubsearch_core::server::build_server;

static TRACING: Once = Once::new();

/// Handle to a running stubsearch test server.
pub struct TestServer {
    base_url: String,
    client: Client,
    dataset_len: usize,
}

impl TestServer {
    /// Start a stubsearch instance with `generated_records` random
    /// records on top of the curated seeds.
    ///
    /// Ports are allocated dynamically, so tests can run in parallel.
    pub fn start(generated_records: usize) -> Self {
        TRACING.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("warn")
                .with_test_writer()
                .try_init();
        });

        let listen_port = free_port();

        let config = StubsearchConfig {
            server: stubsearch_core::config::ServerConfig {
                listen: format!("127.0.0.1:{listen_port}"),
            },
            data: stubsearch_core::config::DataConfig { generated_records },
        };

        let dataset = Arc::new(Dataset::generate(config.data.generated_records));
        let dataset_len = dataset.len();

        let server = build_server(&config, dataset).expect("failed to build stubsearch server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        // Wait for server to accept connections
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build client");

        Self {
            base_url,
            client,
            dataset_len,
        }
    }

    /// Convenience helper for GET requests.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    /// Convenience helper for POST requests.
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(format!("{}{}", self.base_url, path))
    }

    /// POST a search body to the alerts index.
    pub fn search(&self, body: &serde_json::Value) -> RequestBuilder {
        self.post("/wazuh-alerts-*/_search").json(body)
    }

    /// Size of the dataset the server was started with.
    pub fn dataset_len(&self) -> usize {
        self.dataset_len
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Poll until the server responds (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
