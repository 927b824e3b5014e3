use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::DriveError;

const DRIVE_BASE_URL: &str = "https://www.googleapis.com";

#[derive(Clone, Debug)]
pub struct DriveHttpClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl DriveHttpClient {
    pub fn new(access_token: String) -> Result<Self, DriveError> {
        if access_token.trim().is_empty() {
            return Err(DriveError::Config(
                "access_token cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            http: Client::new(),
            base_url: DRIVE_BASE_URL.to_string(),
            access_token,
        })
    }

    pub fn set_base_url(&mut self, base_url: String) -> Result<(), DriveError> {
        reqwest::Url::parse(&base_url)
            .map_err(|err| DriveError::Config(format!("invalid base_url: {err}")))?;
        self.base_url = base_url;
        Ok(())
    }

    pub async fn get_typed<Resp>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Resp, DriveError>
    where
        Resp: DeserializeOwned,
    {
        let response = self.get_checked(path, query).await?;
        response
            .json::<Resp>()
            .await
            .map_err(|err| DriveError::Malformed(err.to_string()))
    }

    pub async fn get_text(&self, path: &str, query: &[(&str, &str)]) -> Result<String, DriveError> {
        let response = self.get_checked(path, query).await?;
        response
            .text()
            .await
            .map_err(|err| DriveError::Malformed(err.to_string()))
    }

    async fn get_checked(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Response, DriveError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await
            .map_err(|err| DriveError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let retry_after_seconds = response
            .headers()
            .get("Retry-After")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<u64>().ok());
        let body: Value = response
            .json::<Value>()
            .await
            .unwrap_or_else(|_| Value::String(String::new()));
        let message = body
            .pointer("/error/message")
            .and_then(Value::as_str)
            .unwrap_or("unknown drive error")
            .to_string();

        Err(DriveError::Api {
            status: status.as_u16(),
            message,
            retry_after_seconds,
        })
    }
}
