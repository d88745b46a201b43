//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use faq_site::lifecycle::{build_registry, Shutdown};
use faq_site::{HttpServer, SiteConfig};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A host running on an ephemeral port.
pub struct TestSite {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestSite {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the host with `config`, bound to 127.0.0.1 on a free port.
pub async fn start_site(config: SiteConfig) -> TestSite {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let registry = build_registry(&config).unwrap();
    let server = HttpServer::new(config, registry);
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();

    let handle = tokio::spawn(async move { server.run(listener, rx).await });

    TestSite {
        addr,
        shutdown,
        handle,
    }
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}
