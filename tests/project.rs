mod common;

use serde_json::Value;

#[tokio::test]
async fn projects_are_scoped_to_the_user() {
    let Some(app) = common::spawn_app().await else {
        return;
    };

    for (user_id, name) in [("designer", "Landing page"), ("designer", "Dashboard"), ("other", "Shop")] {
        sqlx::query("INSERT INTO projects (user_id, name) VALUES ($1, $2)")
            .bind(user_id)
            .bind(name)
            .execute(&app.db_pool)
            .await
            .expect("Failed to insert project");
    }

    let client = reqwest::Client::new();
    let body: Value = client
        .get(&format!("{}/projects", &app.address))
        .bearer_auth("designer")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let list = body["list"].as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.iter().all(|project| project["user_id"] == "designer"));

    let profile: Value = client
        .get(&format!("{}/profile", &app.address))
        .bearer_auth("designer")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(profile["item"]["projects"], 2);
    assert!(profile["item"]["plan"].is_null());

    let response = client
        .get(&format!("{}/projects", &app.address))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 401);
}
