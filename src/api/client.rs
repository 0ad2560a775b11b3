//! HTTP access to the UpSkill collection endpoints

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::api::ApiError;
use crate::config::Config;
use crate::models::Resource;

/// Issues a single GET and hands back the parsed JSON body
#[async_trait]
pub trait ApiClient: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;
}

/// reqwest-backed client rooted at the configured API base URL
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let mut builder = Client::builder().user_agent(&config.http.user_agent);
        if let Some(timeout) = config.http_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, path: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, path);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ApiClient for HttpClient {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url_for(path)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status_code: status.as_u16(),
                path: path.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| ApiError::InvalidJson {
            path: path.to_string(),
            source,
        })
    }
}

/// Fetch the collection of `R` and pull the records out of its named field
pub async fn fetch_collection<R: Resource>(client: &dyn ApiClient) -> Result<Vec<R>, ApiError> {
    let body = client.get_json(R::ENDPOINT).await?;

    let mut object = match body {
        Value::Object(object) => object,
        _ => {
            return Err(ApiError::NotAnObject {
                path: R::ENDPOINT.to_string(),
            })
        }
    };

    let records = object.remove(R::FIELD).ok_or_else(|| ApiError::MissingField {
        path: R::ENDPOINT.to_string(),
        field: R::FIELD.to_string(),
    })?;

    serde_json::from_value(records).map_err(|source| ApiError::Decode {
        field: R::FIELD.to_string(),
        source,
    })
}
