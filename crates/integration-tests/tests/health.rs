mod harness;

use harness::config::ConfigBuilder;
use harness::fixtures::Fixture;
use harness::server::TestServer;

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let fixture = Fixture::new();
    let server = TestServer::start(ConfigBuilder::new(&fixture).build()).await.unwrap();

    let resp = server.get("/health", None).await;

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn health_endpoint_disabled() {
    let fixture = Fixture::new();
    let config = ConfigBuilder::new(&fixture).without_health().build();
    let server = TestServer::start(config).await.unwrap();

    let resp = server.get("/health", None).await;

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn server_refuses_to_start_without_definitions() {
    let fixture = Fixture::new();
    std::fs::remove_file(fixture.path().join("errors.yml")).unwrap();

    let result = TestServer::start(ConfigBuilder::new(&fixture).build()).await;

    assert!(result.is_err());
}
