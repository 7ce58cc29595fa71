mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn premium_user_provisions_repository() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();
    let url = format!("{}/github", &app.address);
    app.subscribe("team-lead", "Premium Plan").await;

    let body: Value = client
        .post(&url)
        .bearer_auth("team-lead")
        .json(&json!({ "action": "create_repo", "data": { "name": "ui-kit" } }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["repository"]["repo_name"], "ui-kit");
    assert_eq!(body["repository"]["is_private"], true);
    let repo_id = body["repository"]["id"].as_str().unwrap().to_string();

    let body: Value = client
        .post(&url)
        .bearer_auth("team-lead")
        .json(&json!({
            "action": "add_collaborator",
            "data": { "repoId": repo_id, "email": "designer" }
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["collaborator"]["permission_level"], "push");

    let body: Value = client
        .post(&url)
        .bearer_auth("team-lead")
        .json(&json!({ "action": "list_collaborators", "data": { "repoId": repo_id } }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["collaborators"].as_array().unwrap().len(), 1);

    let component_id = app.insert_component("React", false).await;
    let body: Value = client
        .put(&format!("{}/components/{}/repository", &app.address, component_id))
        .bearer_auth("team-lead")
        .json(&json!({ "repoId": repo_id }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["item"]["github_repo_id"], repo_id.as_str());
}

#[tokio::test]
async fn proxy_requires_github_integration() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();
    app.subscribe("web-only", "Web Plan").await;

    let response = client
        .post(&format!("{}/github", &app.address))
        .bearer_auth("web-only")
        .json(&json!({ "action": "list_repos" }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);

    let response = client
        .post(&format!("{}/github", &app.address))
        .bearer_auth("premium")
        .json(&json!({ "action": "add_collaborator", "data": { "repoId": uuid::Uuid::new_v4(), "email": "x" } }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 403);
}

#[tokio::test]
async fn unknown_repository_is_not_found() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    app.subscribe("team-lead", "Premium Plan").await;

    let response = reqwest::Client::new()
        .post(&format!("{}/github", &app.address))
        .bearer_auth("team-lead")
        .json(&json!({
            "action": "add_collaborator",
            "data": { "repoId": uuid::Uuid::new_v4(), "email": "designer" }
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Repository not found");
}
