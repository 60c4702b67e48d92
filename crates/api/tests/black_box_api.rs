use std::sync::Arc;

use reqwest::StatusCode;

use partdash_inventory::standard_catalog;
use partdash_views::PartViewBuilder;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let builder = PartViewBuilder::new(Arc::new(standard_catalog().unwrap()));
        let app = partdash_api::app::build_app(builder);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn part_options_are_sorted_and_complete() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/parts").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<serde_json::Value> = res.json().await.unwrap();
    assert_eq!(body.len(), 31);

    let keys: Vec<&str> = body
        .iter()
        .map(|o| o["part_number"].as_str().unwrap())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    assert_eq!(body[0]["part_number"], "E2081-61116");
    assert_eq!(body[0]["label"], "E2081-61116 - Prism Coating");
}

#[tokio::test]
async fn part_view_end_to_end() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/parts/E2084-66501").await;
    assert_eq!(res.status(), StatusCode::OK);

    let view: serde_json::Value = res.json().await.unwrap();
    assert_eq!(view["title"], "E2084-66501 - Motorized Flipper");
    assert_eq!(view["yield_label"], "99.7%");
    assert_eq!(view["yield_tier"], "good");
    assert_eq!(view["total_inventory_label"], "3325");
    assert_eq!(view["inventory_tier"], "good");
    assert_eq!(view["inventory_breakdown"][0]["label"], "CM #1");
    assert_eq!(view["inventory_breakdown"][0]["value"], 1379);
    assert_eq!(view["inventory_breakdown"][1]["value"], 1694);
    assert_eq!(view["inventory_breakdown"][2]["value"], 252);
    assert_eq!(view["supplier"], "McDonalds");
    assert_eq!(view["supplier_peer_count"], 7);
    assert_eq!(view["supplier_peers"].as_array().unwrap().len(), 6);
    assert_eq!(view["breakdown_shares"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn missing_oem_renders_zero() {
    let srv = TestServer::spawn().await;
    let view: serde_json::Value = srv.get("/parts/E2085-66520").await.json().await.unwrap();

    assert_eq!(view["total_inventory_label"], "0");
    assert_eq!(view["inventory_tier"], "bad");
    assert_eq!(view["inventory_breakdown"][2]["label"], "OEM");
    assert_eq!(view["inventory_breakdown"][2]["value"], 0);
    assert_eq!(view["breakdown_shares"][2]["percent"], 0.0);
}

#[tokio::test]
async fn unknown_part_is_404() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/parts/E0000-00000").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
    assert!(body["message"].as_str().unwrap().contains("E0000-00000"));
}

#[tokio::test]
async fn supplier_parts_in_catalog_order() {
    let srv = TestServer::spawn().await;

    let quiznos: Vec<serde_json::Value> = srv
        .get("/suppliers/Quiznos/parts")
        .await
        .json()
        .await
        .unwrap();
    let keys: Vec<&str> = quiznos
        .iter()
        .map(|p| p["part_number"].as_str().unwrap())
        .collect();
    assert_eq!(
        keys,
        vec!["E2081-61116", "E2081-61120", "E2084-67600", "E2084-61101", "E2084-67920"]
    );

    let taco_time: Vec<serde_json::Value> = srv
        .get("/suppliers/Taco%20Time/parts")
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(taco_time.len(), 2);
}

#[tokio::test]
async fn unknown_supplier_is_empty_list() {
    let srv = TestServer::spawn().await;
    let res = srv.get("/suppliers/Initech/parts").await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: Vec<serde_json::Value> = res.json().await.unwrap();
    assert!(body.is_empty());
}
