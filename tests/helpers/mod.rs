#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use ecoclean::{
    AppState,
    config::{Config, DatabaseConfig, ServerConfig},
};
use ecoclean_report::{Predictor, WasteInput};
use http_body_util::BodyExt;
use serde_json::Value;
use temp_dir::TempDir;
use tower::ServiceExt;

/// Predictor returning a fixed emission, or failing when none is set.
#[derive(Default)]
pub struct StubPredictor {
    pub emission: Option<f64>,
    pub calls: AtomicUsize,
}

impl StubPredictor {
    pub fn returning(emission: f64) -> Self {
        Self {
            emission: Some(emission),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Predictor for StubPredictor {
    async fn predict_emission(&self, _input: &WasteInput) -> ecoclean_shared::Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.emission.ok_or_else(|| {
            ecoclean_shared::Error::Upstream("Prediction service unavailable".to_owned())
        })
    }
}

pub struct TestApp {
    pub router: Router,
    pub predictor: Arc<StubPredictor>,
    _dir: TempDir,
}

pub async fn spawn_app(predictor: StubPredictor) -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("ecoclean.db").to_str().unwrap());

    let pool = ecoclean::db::create_pool(&url, 1).await?;
    ecoclean::db::migrate(&pool).await?;

    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 5000,
            allowed_origins: vec![],
        },
        database: DatabaseConfig {
            url,
            max_connections: 1,
        },
        admin: Default::default(),
        ml: Default::default(),
        observability: Default::default(),
    };

    let shared_state = ecoclean_shared::State::single(pool.clone());
    let predictor = Arc::new(predictor);

    let state = AppState {
        admin: ecoclean_user::AdminGate::new(&config.admin.username, &config.admin.password),
        user_command: ecoclean_user::Command::new(shared_state.clone()),
        event_command: ecoclean_event::Command::new(shared_state),
        predictor: predictor.clone(),
        pool,
        config,
    };

    Ok(TestApp {
        router: ecoclean::app(state)?,
        predictor,
        _dir: dir,
    })
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, Value)> {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.router.clone().oneshot(req).await?;
        let status = response.status();
        let bytes = response.into_body().collect().await?.to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        Ok((status, json))
    }

    pub async fn get(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
        self.request(Method::DELETE, uri, None).await
    }

    pub async fn create_event(&self, title: &str) -> anyhow::Result<String> {
        let (status, body) = self
            .post(
                "/api/events/create",
                serde_json::json!({
                    "title": title,
                    "description": "Bring gloves",
                    "location": "Juhu Beach",
                    "date": "2025-03-09",
                    "time": "07:00",
                }),
            )
            .await?;
        assert_eq!(status, StatusCode::CREATED);

        Ok(body["id"].as_str().unwrap().to_owned())
    }
}
