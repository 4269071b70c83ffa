use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes::{self, ServerState};
use service::test_support::MemoryDogStore;

struct TestApp {
    base_url: String,
}

// The router runs against the in-memory store here; the store handle being
// explicit request state is what makes this swap possible.
async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState { dogs: Arc::new(MemoryDogStore::new()) };
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

fn rex() -> Value {
    json!({"name": "Rex", "age": 3, "gender": "male"})
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api-docs/openapi.json", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert!(body["openapi"].as_str().unwrap_or_default().starts_with('3'));
    assert!(body["paths"].get("/dogs").is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_dog_record_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // Create
    let res = c.post(format!("{}/dogs", app.base_url)).json(&rex()).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    let id = created["id"].as_str().expect("assigned id").to_string();
    assert_eq!(id.len(), 24);
    assert!(id.chars().all(|ch| ch.is_ascii_hexdigit()));
    assert_eq!(created["name"], "Rex");
    assert_eq!(created["age"].as_f64(), Some(3.0));
    assert_eq!(created["gender"], "male");

    // Read back: identical body
    let res = c.get(format!("{}/dogs/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let fetched = res.json::<Value>().await?;
    assert_eq!(fetched, created);

    // Partial update: only weight changes
    let res = c
        .put(format!("{}/dogs/{}", app.base_url, id))
        .json(&json!({"weight": 20}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<Value>().await?;
    assert_eq!(updated["weight"].as_f64(), Some(20.0));
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["name"], "Rex");
    assert_eq!(updated["age"].as_f64(), Some(3.0));
    assert_eq!(updated["gender"], "male");

    // Delete returns the pre-delete record
    let res = c.delete(format!("{}/dogs/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let deleted = res.json::<Value>().await?;
    assert_eq!(deleted, updated);

    // Gone afterwards
    let res = c.get(format!("{}/dogs/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body, json!({"error": "Dog not found"}));
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_id_is_a_format_error() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.get(format!("{}/dogs/not-an-id", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Invalid ID format"}));

    let res = c
        .put(format!("{}/dogs/not-an-id", app.base_url))
        .json(&json!({"weight": 20}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Invalid ID format"}));

    let res = c.delete(format!("{}/dogs/not-an-id", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Invalid ID format"}));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_id_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    // Well-formed ObjectId that was never issued
    let id = "64b0f0a4c2a4f1e8d9c0b1a2";

    let res = c.get(format!("{}/dogs/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c
        .put(format!("{}/dogs/{}", app.base_url, id))
        .json(&json!({"weight": 20}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await?, json!({"error": "Dog not found"}));

    let res = c.delete(format!("{}/dogs/{}", app.base_url, id)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_create_missing_required_field_persists_nothing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/dogs", app.base_url))
        .json(&json!({"name": "Rex", "age": 3}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Failed to create dog");
    assert!(body["details"].as_str().unwrap_or_default().contains("gender"));

    let res = c.get(format!("{}/dogs", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_payload_fields_are_ignored() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let mut payload = rex();
    payload["breed"] = json!("labrador");
    payload["id"] = json!("should-be-ignored");
    let res = c.post(format!("{}/dogs", app.base_url)).json(&payload).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert!(created.get("breed").is_none());
    assert_ne!(created["id"], "should-be-ignored");

    let id = created["id"].as_str().expect("assigned id");
    let res = c.get(format!("{}/dogs/{}", app.base_url, id)).send().await?;
    assert!(res.json::<Value>().await?.get("breed").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_invalid_present_field_aborts_update() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.post(format!("{}/dogs", app.base_url)).json(&rex()).send().await?;
    let created = res.json::<Value>().await?;
    let id = created["id"].as_str().expect("assigned id").to_string();

    let res = c
        .put(format!("{}/dogs/{}", app.base_url, id))
        .json(&json!({"name": "", "weight": 20}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Failed to update dog");
    assert!(body["details"].as_str().unwrap_or_default().contains("name"));

    // No partial merge happened
    let res = c.get(format!("{}/dogs/{}", app.base_url, id)).send().await?;
    let after = res.json::<Value>().await?;
    assert_eq!(after["name"], "Rex");
    assert!(after.get("weight").is_none());
    Ok(())
}

#[tokio::test]
async fn e2e_malformed_json_body_is_rejected_as_json() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/dogs", app.base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Failed to create dog");
    assert!(body["details"].as_str().is_some());
    Ok(())
}

#[tokio::test]
async fn e2e_nested_owner_round_trips() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let mut payload = rex();
    payload["owner"] = json!({"name": "Ana", "bio": "Foster carer"});
    let res = c.post(format!("{}/dogs", app.base_url)).json(&payload).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created = res.json::<Value>().await?;
    assert_eq!(created["owner"]["name"], "Ana");
    assert_eq!(created["owner"]["bio"], "Foster carer");
    assert!(created["owner"].get("imageUrl").is_none());
    Ok(())
}
