use crate::error::{HarvestError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = "radioharvest/0.1 (station catalog builder)";

#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET a JSON payload and deserialize it.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.client.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(HarvestError::Http(response.error_for_status().unwrap_err()));
        }

        Ok(response.json().await?)
    }

    /// GET a page as text, giving up after `timeout`.
    pub async fn get_text(&self, url: &str, timeout: Duration) -> Result<String> {
        let response = self.client.get(url).timeout(timeout).send().await?;

        if !response.status().is_success() {
            return Err(HarvestError::Http(response.error_for_status().unwrap_err()));
        }

        let text = response.text().await?;
        Ok(text)
    }

    /// GET a binary payload.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(HarvestError::Http(response.error_for_status().unwrap_err()));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_text_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_body("<html>hi</html>")
            .create_async()
            .await;

        let client = HttpClient::new();
        let url = format!("{}/page", server.url());
        let text = client
            .get_text(&url, Duration::from_secs(15))
            .await
            .unwrap();

        assert_eq!(text, "<html>hi</html>");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_text_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/missing")
            .with_status(404)
            .create_async()
            .await;

        let client = HttpClient::new();
        let url = format!("{}/missing", server.url());
        let result = client.get_text(&url, Duration::from_secs(15)).await;

        assert!(matches!(result, Err(HarvestError::Http(_))));
    }

    #[tokio::test]
    async fn test_get_bytes_returns_payload() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/img.png")
            .with_status(200)
            .with_body(&[0x89u8, 0x50, 0x4E, 0x47][..])
            .create_async()
            .await;

        let client = HttpClient::new();
        let url = format!("{}/img.png", server.url());
        let bytes = client.get_bytes(&url).await.unwrap();

        assert_eq!(bytes, vec![0x89, 0x50, 0x4E, 0x47]);
    }

    #[tokio::test]
    async fn test_get_json_deserializes() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/data")
            .match_query(mockito::Matcher::UrlEncoded("k".into(), "v".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[1, 2, 3]"#)
            .create_async()
            .await;

        let client = HttpClient::new();
        let url = format!("{}/data", server.url());
        let values: Vec<u32> = client.get_json(&url, &[("k", "v")]).await.unwrap();

        assert_eq!(values, vec![1, 2, 3]);
    }
}
