use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::post};
use ecoclean_report::{HttpPredictor, Predictor, WasteInput};
use serde_json::{Value, json};

async fn spawn(app: Router) -> anyhow::Result<String> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok(format!("http://{addr}"))
}

fn sample() -> WasteInput {
    WasteInput::from([("Plastic".to_owned(), 2.0), ("Metal".to_owned(), 1.0)])
}

#[tokio::test]
async fn posts_raw_mapping_and_reads_emission() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/predict",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body, json!({"Metal": 1.0, "Plastic": 2.0}));
            Json(json!({"predicted_emission_CO2e": 7.25}))
        }),
    );
    let base = spawn(app).await?;
    let predictor = HttpPredictor::new(&base, "/predict", Duration::from_secs(5))?;

    assert_eq!(predictor.url().path(), "/predict");
    assert_eq!(predictor.predict_emission(&sample()).await?, 7.25);

    Ok(())
}

#[tokio::test]
async fn keeps_base_url_path_prefix() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/ml/predict",
        post(|| async { Json(json!({"predicted_emission_CO2e": 4.5})) }),
    );
    let base = spawn(app).await?;

    for prefix in ["/ml", "/ml/"] {
        let predictor =
            HttpPredictor::new(&format!("{base}{prefix}"), "/predict", Duration::from_secs(5))?;

        assert_eq!(predictor.url().path(), "/ml/predict");
        assert_eq!(predictor.predict_emission(&sample()).await?, 4.5);
    }

    let predictor = HttpPredictor::new(&format!("{base}/ml"), "predict", Duration::from_secs(5))?;
    assert_eq!(predictor.url().path(), "/ml/predict");

    Ok(())
}

#[tokio::test]
async fn server_error_is_upstream_unavailable() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/predict",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "model exploded") }),
    );
    let base = spawn(app).await?;
    let predictor = HttpPredictor::new(&base, "/predict", Duration::from_secs(5))?;

    let err = predictor.predict_emission(&sample()).await.unwrap_err();
    assert!(matches!(err, ecoclean_shared::Error::Upstream(_)));
    assert!(!err.to_string().contains("model exploded"));

    Ok(())
}

#[tokio::test]
async fn missing_field_is_upstream_unavailable() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/predict",
        post(|| async { Json(json!({"prediction": 3.0})) }),
    );
    let base = spawn(app).await?;
    let predictor = HttpPredictor::new(&base, "/predict", Duration::from_secs(5))?;

    let err = predictor.predict_emission(&sample()).await.unwrap_err();
    assert!(matches!(err, ecoclean_shared::Error::Upstream(_)));

    Ok(())
}

#[tokio::test]
async fn slow_service_times_out() -> anyhow::Result<()> {
    let app = Router::new().route(
        "/predict",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({"predicted_emission_CO2e": 1.0}))
        }),
    );
    let base = spawn(app).await?;
    let predictor = HttpPredictor::new(&base, "/predict", Duration::from_millis(200))?;

    let err = predictor.predict_emission(&sample()).await.unwrap_err();
    assert!(matches!(err, ecoclean_shared::Error::Upstream(_)));

    Ok(())
}

#[tokio::test]
async fn unreachable_service_is_upstream_unavailable() -> anyhow::Result<()> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    drop(listener);

    let predictor = HttpPredictor::new(&format!("http://{addr}"), "/predict", Duration::from_secs(1))?;
    let err = predictor.predict_emission(&sample()).await.unwrap_err();
    assert!(matches!(err, ecoclean_shared::Error::Upstream(_)));

    Ok(())
}

#[test]
fn rejects_invalid_base_url() {
    assert!(HttpPredictor::new("not a url", "/predict", Duration::from_secs(1)).is_err());
}
