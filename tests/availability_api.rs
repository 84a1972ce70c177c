//! 可用性编辑器 + 价格面板 + 占用网格的端到端测试
//!
//! 直接对组装好的 Router 发起 oneshot 请求，不经过真实 TCP。

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use ward_server::{Config, ServerState, api};

fn test_app() -> (Router, ServerState) {
    let config = Config::with_overrides(0);
    let state = ServerState::initialize(&config);
    let app = api::build_app().with_state(state.clone());
    (app, state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_list_beds_returns_seed_catalog() {
    let (app, _state) = test_app();

    let response = app.oneshot(get("/api/beds")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let catalog = body_json(response).await;
    let categories = catalog.as_array().unwrap();
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[0]["type"], "General");
    assert_eq!(categories[0]["total"], 100);
    assert_eq!(categories[0]["available"], 30);
    assert_eq!(categories[1]["type"], "ICU");
    assert_eq!(categories[1]["checkInTime"], "Immediate");
}

#[tokio::test]
async fn test_update_availability_end_to_end() {
    let (app, _state) = test_app();

    // 提交编辑器：General -> 45
    let response = app
        .clone()
        .oneshot(put_json("/api/beds/1/availability", json!({ "available": 45 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["available"], 45);

    // General.available == 45，其余类别逐字段不变
    let response = app.oneshot(get("/api/beds")).await.unwrap();
    let catalog = body_json(response).await;
    let categories = catalog.as_array().unwrap();
    assert_eq!(categories[0]["available"], 45);
    assert_eq!(categories[0]["total"], 100);
    assert_eq!(categories[0]["price"], 200.0);
    assert_eq!(categories[1]["available"], 5);
    assert_eq!(categories[2]["available"], 2);
    assert_eq!(categories[3]["available"], 10);
    assert_eq!(categories[4]["available"], 8);
}

#[tokio::test]
async fn test_update_over_capacity_rejected() {
    let (app, state) = test_app();

    let response = app
        .oneshot(put_json("/api/beds/1/availability", json!({ "available": 101 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["code"], "E0002");

    // 状态未被污染
    assert_eq!(state.catalog().get(1).unwrap().available, 30);
}

#[tokio::test]
async fn test_update_unknown_category_is_404() {
    let (app, _state) = test_app();

    let response = app
        .oneshot(put_json("/api/beds/42/availability", json!({ "available": 5 })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await;
    assert_eq!(body["code"], "E0003");
}

#[tokio::test]
async fn test_update_emits_notification_and_sync() {
    let (app, state) = test_app();
    let mut rx = state.message_bus.subscribe();

    app.oneshot(put_json("/api/beds/2/availability", json!({ "available": 12 })))
        .await
        .unwrap();

    // 第一条：用户可见通知
    let msg = rx.recv().await.unwrap();
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["kind"], "notification");
    assert_eq!(value["payload"]["title"], "Bed availability updated");
    assert_eq!(
        value["payload"]["message"],
        "ICU beds availability has been updated to 12"
    );

    // 第二条：同步信号，版本号从 1 开始
    let msg = rx.recv().await.unwrap();
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(value["kind"], "sync");
    assert_eq!(value["payload"]["resource"], "bed_category");
    assert_eq!(value["payload"]["version"], 1);
    assert_eq!(value["payload"]["action"], "updated");
    assert_eq!(value["payload"]["id"], "2");
}

#[tokio::test]
async fn test_rate_card_toggle_over_http() {
    let (app, _state) = test_app();

    // 开关关闭：只有每晚价格
    let response = app.clone().oneshot(get("/api/beds/1/rates")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let card = body_json(response).await;
    assert_eq!(card["nightly"], 200.0);
    assert!(card.get("weekly").is_none());
    assert!(card.get("monthly").is_none());

    // 开关打开：200×7×0.9 = 1260, 200×30×0.8 = 4800
    let response = app
        .oneshot(get("/api/beds/1/rates?includeDiscounts=true"))
        .await
        .unwrap();
    let card = body_json(response).await;
    assert_eq!(card["weekly"], 1260.0);
    assert_eq!(card["monthly"], 4800.0);
    assert_eq!(card["nightly"], 200.0);
}

#[tokio::test]
async fn test_occupancy_all_and_single_tab() {
    let (app, state) = test_app();

    // "All" 标签页
    let response = app.clone().oneshot(get("/api/occupancy")).await.unwrap();
    let grid = body_json(response).await;
    assert_eq!(grid.as_array().unwrap().len(), 5);

    // ICU 标签页：20 个槽位，前 5 个空闲
    let response = app
        .oneshot(get("/api/occupancy?categoryId=2"))
        .await
        .unwrap();
    let grid = body_json(response).await;
    let icu = &grid.as_array().unwrap()[0];
    assert_eq!(icu["bedType"], "ICU");
    assert_eq!(icu["accentColor"], "red");
    let slots = icu["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 20);
    assert_eq!(slots[4]["status"], "free");
    assert_eq!(slots[5]["status"], "occupied");

    // 切换标签页不变更任何状态
    assert_eq!(state.catalog().get(2).unwrap().available, 5);
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _state) = test_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["categories"], 5);
}
