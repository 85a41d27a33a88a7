use std::sync::Arc;

use client::{
    GateConfig, GateDecision, HttpStatusSource, MaintenanceCache, MaintenanceGate, Rendered,
};
use reqwest::{StatusCode, header::SET_COOKIE};
use server::{
    app,
    config::Config,
    database::{MemorySettingsStore, SettingsStore},
    state::AppState,
};
use shared::{FALLBACK_ROUTE, Role, STATUS_ROUTE, Session, Settings};
use tokio::net::TcpListener;

async fn serve(store: Arc<dyn SettingsStore>) -> String {
    let config = Config {
        port: 0,
        redis_url: None,
        production: false,
    };
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app(AppState::with_store(config, store)))
            .await
            .unwrap();
    });

    format!("http://{address}")
}

async fn gate_for(base_url: &str, config: GateConfig) -> MaintenanceGate {
    let source = HttpStatusSource::new(reqwest::Client::new(), base_url);
    let mut gate = MaintenanceGate::new(MaintenanceCache::new(Arc::new(source)), config);
    gate.mount().await;
    gate
}

#[tokio::test]
async fn test_flag_flip_reaches_cookie_and_gates() {
    let store = Arc::new(MemorySettingsStore::new());
    let base_url = serve(store.clone()).await;
    let http = reqwest::Client::new();

    let before = gate_for(&base_url, GateConfig::default()).await;
    assert_eq!(
        before.decision(&Session::anonymous()),
        GateDecision::RenderChildren
    );

    store
        .write(&Settings {
            maintenance_mode: true,
            contact_email: Some("help@shop.test".to_string()),
            contact_phone: None,
        })
        .await
        .unwrap();

    let response = http
        .get(format!("{base_url}{STATUS_ROUTE}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response.headers()[SET_COOKIE].to_str().unwrap().to_string();
    assert!(cookie.starts_with("maintenance_mode=true"));
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "maintenanceMode": true }));

    let visitor = gate_for(&base_url, GateConfig::default()).await;
    assert_eq!(
        visitor.render(&Session::anonymous(), || "shop", || "closed"),
        Rendered::Fallback("closed")
    );

    let admin = gate_for(&base_url, GateConfig::default()).await;
    assert_eq!(
        admin.render(&Session::authenticated(Role::Admin), || "shop", || "closed"),
        Rendered::Children("shop")
    );

    let fallback = http
        .get(format!("{base_url}{FALLBACK_ROUTE}"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(fallback.contains("help@shop.test"));
}

#[tokio::test]
async fn test_unreachable_server_fails_open() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    let gate = gate_for(&format!("http://{address}"), GateConfig::default()).await;

    assert_eq!(
        gate.decision(&Session::anonymous()),
        GateDecision::RenderChildren
    );
}
