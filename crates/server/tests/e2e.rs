use std::net::SocketAddr;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::store::ConfigStore;

struct TestApp {
    base_url: String,
}

/// Spin up the full router on an ephemeral port with a freshly seeded
/// store, so every test sees ids 1 and 2 and nothing else.
async fn start_server() -> anyhow::Result<TestApp> {
    let store = ConfigStore::new();
    store.seed().await;
    let state = ServerState { store };

    let app: Router = routes::build_router(CorsLayer::very_permissive(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_seeded_collection_with_links() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/configurations", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["size"], 2);
    assert_eq!(body["link"]["href"], "/configurations");
    assert_eq!(body["link"]["rel"], "uri");

    let items = body["configurations"].as_array().expect("configurations array");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["content"], "Some Content");
    assert_eq!(items[0]["status"], "ACTIVE");
    assert_eq!(items[0]["link"]["href"], "/configurations/1");
    assert_eq!(items[0]["link"]["rel"], "self");
    assert_eq!(items[1]["content"], "Some More Content");
    assert_eq!(items[1]["status"], "INACTIVE");
    Ok(())
}

#[tokio::test]
async fn e2e_get_by_id_has_self_link() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/configurations/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["id"], 1);
    assert_eq!(body["link"]["href"], "/configurations/1");
    assert_eq!(body["link"]["rel"], "self");
    Ok(())
}

#[tokio::test]
async fn e2e_get_unknown_id_is_404_with_empty_body() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/configurations/999", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.text().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_create_returns_location_and_no_body() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/configurations", app.base_url))
        .json(&json!({"content": "Fresh Content", "status": "ACTIVE"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let location = res
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .expect("Location header");
    assert_eq!(location, "/configurations/3");
    assert!(res.text().await?.is_empty());

    // the new resource is reachable at the advertised URI
    let res = c.get(format!("{}{}", app.base_url, location)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["content"], "Fresh Content");
    assert_eq!(body["status"], "ACTIVE");
    Ok(())
}

#[tokio::test]
async fn e2e_create_without_content_is_400_and_burns_no_id() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/configurations", app.base_url))
        .json(&json!({"status": "ACTIVE"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Config content not found");

    // store unchanged, and the next create still gets id 3
    let res = c.get(format!("{}/configurations", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?["size"], 2);

    let res = c
        .post(format!("{}/configurations", app.base_url))
        .json(&json!({"content": "ok", "status": "INACTIVE"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    assert_eq!(
        res.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/configurations/3")
    );
    Ok(())
}

#[tokio::test]
async fn e2e_update_success_message() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .put(format!("{}/configurations/1", app.base_url))
        .json(&json!({"content": "Replaced", "status": "INACTIVE"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Config Updated Successfully");

    let res = c.get(format!("{}/configurations/1", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["id"], 1);
    assert_eq!(body["content"], "Replaced");
    assert_eq!(body["status"], "INACTIVE");
    Ok(())
}

#[tokio::test]
async fn e2e_update_unknown_id_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .put(format!("{}/configurations/999", app.base_url))
        .json(&json!({"content": "valid", "status": "ACTIVE"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert!(res.text().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_update_with_empty_content_is_400_and_record_unchanged() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .put(format!("{}/configurations/1", app.base_url))
        .json(&json!({"content": "", "status": "INACTIVE"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Config content not found");

    let res = c.get(format!("{}/configurations/1", app.base_url)).send().await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["content"], "Some Content");
    assert_eq!(body["status"], "ACTIVE");
    Ok(())
}

#[tokio::test]
async fn e2e_delete_then_get_is_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.delete(format!("{}/configurations/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert!(res.text().await?.is_empty());

    let res = c.get(format!("{}/configurations/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // second delete of the same id
    let res = c.delete(format!("{}/configurations/1", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // collection shrank accordingly
    let res = c.get(format!("{}/configurations", app.base_url)).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?["size"], 1);
    Ok(())
}
