//! Test server wrapper that starts faultmap on a random port

use std::net::SocketAddr;

use faultmap_config::Config;
use faultmap_registry::RegistryHandle;
use faultmap_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
    registry: RegistryHandle,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(config)?;
        let registry = server.registry().clone();
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self {
            addr,
            shutdown,
            client: reqwest::Client::new(),
            registry,
        })
    }

    /// URL of `path` on the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// Registry the server resolves against
    pub fn registry(&self) -> &RegistryHandle {
        &self.registry
    }

    /// `GET path` with an optional `Accept-Language`
    pub async fn get(&self, path: &str, language: Option<&str>) -> reqwest::Response {
        let mut request = self.client.get(self.url(path));
        if let Some(language) = language {
            request = request.header("accept-language", language);
        }
        request.send().await.unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
