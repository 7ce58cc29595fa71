use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::mock::MockGithubConnector;
use super::{CreateRepository, GithubClient, GithubConnector};
use crate::connectors::config::GithubConfig;
use crate::connectors::errors::ConnectorError;

fn client_for(server: &MockServer, token: Option<&str>) -> GithubClient {
    GithubClient::new(GithubConfig {
        enabled: true,
        base_url: server.uri(),
        timeout_secs: 5,
        token: token.map(str::to_string),
    })
    .unwrap()
}

fn new_repo(name: &str) -> CreateRepository {
    CreateRepository {
        name: name.to_string(),
        description: String::new(),
        private: true,
        auto_init: true,
    }
}

#[tokio::test]
async fn create_repository_posts_to_user_repos() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .and(header("authorization", "token secret"))
        .and(body_json(json!({
            "name": "fancy-button",
            "description": "",
            "private": true,
            "auto_init": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": 42,
            "name": "fancy-button",
            "html_url": "https://github.com/acme/fancy-button",
            "private": true,
            "owner": { "login": "acme" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let repo = client_for(&server, Some("secret"))
        .create_repository(&new_repo("fancy-button"))
        .await
        .unwrap();

    assert_eq!(repo.id, 42);
    assert_eq!(repo.owner.login, "acme");
    assert!(repo.private);
}

#[tokio::test]
async fn upstream_error_keeps_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/user/repos"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({ "message": "Repository creation failed." })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server, Some("secret"))
        .create_repository(&new_repo("taken"))
        .await
        .unwrap_err();

    match err {
        ConnectorError::Upstream { status, body } => {
            assert_eq!(status, 422);
            assert_eq!(body["message"], "Repository creation failed.");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn add_collaborator_puts_permission() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/repos/acme/fancy-button/collaborators/octocat"))
        .and(body_json(json!({ "permission": "pull" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 7 })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server, Some("secret"))
        .add_collaborator("acme", "fancy-button", "octocat", "pull")
        .await
        .unwrap();
}

#[tokio::test]
async fn missing_token_never_reaches_github() {
    let server = MockServer::start().await;

    let err = client_for(&server, None)
        .create_repository(&new_repo("fancy-button"))
        .await
        .unwrap_err();

    assert!(matches!(err, ConnectorError::NotConfigured(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn mock_connector_echoes_request() {
    let repo = MockGithubConnector
        .create_repository(&new_repo("offline"))
        .await
        .unwrap();

    assert_eq!(repo.name, "offline");
    assert_eq!(repo.owner.login, "componentry");
}
