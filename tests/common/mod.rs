#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use mealmate::config::{Config, GroceryConfig, LoggingConfig, ServerConfig};
use tower::ServiceExt;

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        },
        logging: LoggingConfig::default(),
        grocery: GroceryConfig::default(),
    }
}

pub fn create_test_app() -> Router {
    mealmate::create_app(test_config())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub content_disposition: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();

    let status = response.status();
    let headers = response.headers();
    let content_type = header_value(headers, header::CONTENT_TYPE);
    let content_disposition = header_value(headers, header::CONTENT_DISPOSITION);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        content_type,
        content_disposition,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

fn header_value(headers: &header::HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .map(|value| value.to_str().unwrap().to_string())
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<String>) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    send(app, request).await
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::from(body.into()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    send(app, request).await
}

pub const TACOS_AND_CHILI: &str = r#"{
    "householdId": "household-1",
    "meals": [
        {
            "name": "Tacos",
            "ingredients": [
                {"name": "Ground Beef", "amount": "1 lb"},
                {"name": "Tortillas", "amount": "8"},
                {"name": "Salt", "amount": "1 tsp"},
                {"name": "Cheddar Cheese", "amount": "1 cup"}
            ]
        },
        {
            "name": "Chili",
            "ingredients": [
                {"name": "ground beef", "amount": "2 lbs"},
                {"name": "Kidney Beans", "amount": "1 can"},
                {"name": "Onion", "amount": "1"}
            ]
        }
    ],
    "pantryItems": [
        {"name": "onion", "quantity": 3, "unit": "whole"}
    ]
}"#;
