mod common;

use serde_json::{json, Value};

#[tokio::test]
async fn owners_are_created_listed_and_renamed() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let acme = app.create_owner("Acme").await;
    let globex = app.create_owner("Globex").await;

    let owners: Value = client
        .get(app.url("/owner"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        owners,
        json!([{"id": acme, "name": "Acme"}, {"id": globex, "name": "Globex"}])
    );

    let response = client
        .put(app.url(&format!("/owner/{}", acme)))
        .json(&json!({"name": "Acme Corp"}))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let renamed: Value = response.json().await.unwrap();
    assert_eq!(renamed, json!({"id": acme, "name": "Acme Corp"}));

    let fetched: Value = client
        .get(app.url(&format!("/owner/{}", acme)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["name"], "Acme Corp");
}

#[tokio::test]
async fn missing_owner_is_not_found() {
    let Some(app) = common::spawn_app().await else {
        return;
    };
    let client = reqwest::Client::new();

    let update = client
        .put(app.url("/owner/404"))
        .json(&json!({"name": "Nobody"}))
        .send()
        .await
        .unwrap();
    assert_eq!(update.status().as_u16(), 404);

    let get = client.get(app.url("/owner/404")).send().await.unwrap();
    assert_eq!(get.status().as_u16(), 404);
}
