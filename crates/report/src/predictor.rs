use std::time::Duration;

use url::Url;

use crate::WasteInput;

/// Field of the prediction service response holding the estimate.
pub const EMISSION_FIELD: &str = "predicted_emission_CO2e";

/// Client contract of the external emission model.
#[async_trait::async_trait]
pub trait Predictor: Send + Sync {
    /// CO2-equivalent kilograms predicted for the waste mapping.
    async fn predict_emission(&self, input: &WasteInput) -> ecoclean_shared::Result<f64>;
}

#[derive(Debug, thiserror::Error)]
pub enum HttpPredictorError {
    #[error("reqwest: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("response is missing a numeric predicted_emission_CO2e")]
    MissingField,
}

#[derive(Debug, Clone)]
pub struct HttpPredictor {
    client: reqwest::Client,
    url: Url,
}

impl HttpPredictor {
    /// `path` is appended to whatever path `base_url` already carries.
    pub fn new(base_url: &str, path: &str, timeout: Duration) -> Result<Self, HttpPredictorError> {
        let mut url = Url::parse(base_url)?;
        let full_path = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&full_path);
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn request(&self, input: &WasteInput) -> Result<f64, HttpPredictorError> {
        let body = self
            .client
            .post(self.url.clone())
            .json(input)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;

        body[EMISSION_FIELD]
            .as_f64()
            .ok_or(HttpPredictorError::MissingField)
    }
}

#[async_trait::async_trait]
impl Predictor for HttpPredictor {
    #[tracing::instrument(skip_all, name = "HttpPredictor::predict_emission", fields(url = %self.url))]
    async fn predict_emission(&self, input: &WasteInput) -> ecoclean_shared::Result<f64> {
        match self.request(input).await {
            Ok(emission) => Ok(emission),
            Err(e) => {
                tracing::error!(error = %e, "prediction service call failed");
                Err(ecoclean_shared::Error::Upstream(
                    "Prediction service unavailable".to_owned(),
                ))
            }
        }
    }
}
