#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use allocfolio_backend::app::create_app;
use allocfolio_backend::external::market_data_provider::MarketDataProvider;
use allocfolio_backend::external::provider_error::ProviderError;
use allocfolio_backend::external::recommendation_provider::RecommendationProvider;
use allocfolio_backend::models::{
    AllocationCategory, AllocationQuery, DateWindow, RecommendationPayload,
};
use allocfolio_backend::state::AppState;

pub struct FakeRecommendations {
    pub answer: Result<Vec<AllocationCategory>, ProviderError>,
    pub queries: Mutex<Vec<AllocationQuery>>,
}

impl FakeRecommendations {
    pub fn answering(answer: Result<Vec<AllocationCategory>, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            queries: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl RecommendationProvider for FakeRecommendations {
    async fn fetch_allocation(
        &self,
        query: &AllocationQuery,
    ) -> Result<RecommendationPayload, ProviderError> {
        self.queries.lock().unwrap().push(query.clone());
        self.answer
            .clone()
            .map(|chart_data| RecommendationPayload { chart_data })
    }
}

pub struct FakeMarketData {
    pub answer: Result<Value, ProviderError>,
    pub windows: Mutex<Vec<(String, DateWindow)>>,
}

impl FakeMarketData {
    pub fn answering(answer: Result<Value, ProviderError>) -> Arc<Self> {
        Arc::new(Self {
            answer,
            windows: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl MarketDataProvider for FakeMarketData {
    async fn search(&self, _query: &str) -> Result<Value, ProviderError> {
        self.answer.clone()
    }

    async fn chart(&self, symbol: &str, window: &DateWindow) -> Result<Value, ProviderError> {
        self.windows
            .lock()
            .unwrap()
            .push((symbol.to_string(), *window));
        self.answer.clone()
    }
}

pub fn app_with(
    recommendation: Arc<dyn RecommendationProvider>,
    market_data: Arc<dyn MarketDataProvider>,
) -> Router {
    create_app(AppState {
        recommendation,
        market_data,
    })
}

pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
