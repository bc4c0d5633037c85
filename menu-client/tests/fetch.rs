// menu-client/tests/fetch.rs
// Product listing against an in-process HTTP server

use axum::{Json, Router, extract::Query, http::HeaderMap, http::StatusCode, routing::get};
use menu_client::{
    BranchCatalog, ClientConfig, ClientError, FALLBACK_BRANCH_ID, HttpClient, MenuSession,
    MenuState, ProductSource, RequestOptions, LOAD_FAILED_MESSAGE,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const PATH: &str = "/api/Product/GetAllByBranch";
const BRANCH: &str = "9b2f6a1e-0c1d-4e5f-8a9b-1c2d3e4f5a6b";

type Seen = Arc<Mutex<Option<(HeaderMap, HashMap<String, String>)>>>;

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Serve `body` on the listing path and record each request's headers and query
async fn serve_listing(body: Value) -> (String, Seen) {
    let seen: Seen = Arc::new(Mutex::new(None));
    let captured = seen.clone();
    let router = Router::new().route(
        PATH,
        get(move |headers: HeaderMap, Query(params): Query<HashMap<String, String>>| {
            let captured = captured.clone();
            let body = body.clone();
            async move {
                *captured.lock().unwrap() = Some((headers, params));
                Json(body)
            }
        }),
    );
    (serve(router).await, seen)
}

fn catalog() -> Value {
    json!([
        {
            "guid": "a",
            "name": "Chicken Mandi",
            "category": { "name": "Rice" },
            "sectionWiseProductDetailList": [{ "price": 45, "isActive": true }],
            "productImages": [{ "thumbnailURL": "/img/mandi.png" }],
            "isMenuItem": true
        },
        {
            "guid": "b",
            "name": "Staff Water",
            "isMenuItem": false
        },
        {
            "guid": "c",
            "name": "Karak",
            "productImages": ["not-an-object"],
            "isMenuItem": true
        }
    ])
}

fn config(base_url: &str) -> ClientConfig {
    ClientConfig::new(base_url)
        .with_app_key("app-key-123")
        .with_app_type("web-menu")
}

#[tokio::test]
async fn test_fetch_sends_headers_and_branch() {
    let (base_url, seen) = serve_listing(catalog()).await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let products = client.get_product_list(Some(BRANCH)).await.unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].name, "Chicken Mandi");
    assert!(products[2].product_images[0].as_record().is_none());

    let (headers, params) = seen.lock().unwrap().take().unwrap();
    assert_eq!(headers.get("client-app-key").unwrap(), "app-key-123");
    assert_eq!(headers.get("client-app-type").unwrap(), "web-menu");
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
    assert_eq!(params.get("globalBranchID").map(String::as_str), Some(BRANCH));
}

#[tokio::test]
async fn test_blank_branch_uses_fallback() {
    let (base_url, seen) = serve_listing(json!([])).await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let products = client.get_product_list(Some("  ")).await.unwrap();
    assert!(products.is_empty());

    let (_, params) = seen.lock().unwrap().take().unwrap();
    assert_eq!(params.get("globalBranchID").map(String::as_str), Some(FALLBACK_BRANCH_ID));
}

#[tokio::test]
async fn test_null_body_is_empty_list() {
    let (base_url, _) = serve_listing(Value::Null).await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let products = client.get_product_list(None).await.unwrap();
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_opt_out_omits_app_headers() {
    let (base_url, seen) = serve_listing(json!([])).await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let _: Vec<Value> = client
        .get_with(PATH, &[("globalBranchID", BRANCH)], RequestOptions::without_app_headers())
        .await
        .unwrap();

    let (headers, _) = seen.lock().unwrap().take().unwrap();
    assert!(headers.get("client-app-key").is_none());
    assert!(headers.get("client-app-type").is_none());
    assert_eq!(headers.get("content-type").unwrap(), "application/json");
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let router = Router::new().route(
        PATH,
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = serve(router).await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let err = client.get_product_list(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Server { status: 500, .. }));
}

#[tokio::test]
async fn test_rejected_credentials_are_server_errors() {
    let router = Router::new().route(
        PATH,
        get(|| async { (StatusCode::UNAUTHORIZED, "bad app key") }),
    );
    let base_url = serve(router).await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let err = client.get_product_list(None).await.unwrap_err();
    match err {
        ClientError::Server { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "bad app key");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_out_of_range_price_keeps_catalog() {
    let (base_url, _) = serve_listing(json!([
        { "guid": "a", "name": "Tea", "basePrice": 10, "isMenuItem": true },
        { "guid": "b", "name": "Gold Leaf Cake", "basePrice": 1e30, "isMenuItem": 1 }
    ]))
    .await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let products = client.get_product_list(None).await.unwrap();
    assert_eq!(products.len(), 2);
    assert!(products[1].base_price.is_none());
    assert!(products[1].is_menu_item);
}

#[tokio::test]
async fn test_unexpected_shape_is_serialization_error() {
    let (base_url, _) = serve_listing(json!({ "items": [] })).await;
    let client = HttpClient::new(&config(&base_url)).unwrap();

    let err = client.get_product_list(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_session_loads_menu_items_over_http() {
    let (base_url, _) = serve_listing(catalog()).await;
    let config = config(&base_url).with_branch_id(BRANCH);
    let catalog = BranchCatalog::new(config.build_http_client().unwrap(), config.branch_id.clone());

    let mut session = MenuSession::new(&base_url);
    session.load(&catalog).await;

    let guids: Vec<&str> = session.products().iter().map(|p| p.guid.as_str()).collect();
    assert_eq!(guids, vec!["a", "c"]);
    assert_eq!(session.categories(), vec!["Rice", "Chef Specials"]);
}

#[tokio::test]
async fn test_session_fails_with_static_message() {
    let router = Router::new().route(PATH, get(|| async { StatusCode::NOT_FOUND }));
    let base_url = serve(router).await;
    let catalog = BranchCatalog::new(HttpClient::new(&config(&base_url)).unwrap(), None);

    assert!(matches!(catalog.fetch_products().await, Err(ClientError::NotFound(_))));

    let mut session = MenuSession::new(&base_url);
    let state = session.load(&catalog).await;
    assert_eq!(state, &MenuState::Failed(LOAD_FAILED_MESSAGE.to_string()));
    assert!(session.products().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_fails() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let client = HttpClient::new(&config(&base_url).with_timeout(2)).unwrap();
    let err = client.get_product_list(None).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
}
