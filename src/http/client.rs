use anyhow::{Context, Result};
use reqwest::{Client, Method, Response};
use serde::Serialize;
use std::time::Duration;

/// Thin reqwest wrapper with a fixed user agent and timeout
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;
        Ok(Self { client })
    }

    pub async fn get(&self, url: &str) -> Result<Response> {
        self.send(Method::GET, url, None::<&()>).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Response> {
        self.send(Method::POST, url, Some(body)).await
    }

    pub async fn put_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> Result<Response> {
        self.send(Method::PUT, url, Some(body)).await
    }

    pub async fn delete(&self, url: &str) -> Result<Response> {
        self.send(Method::DELETE, url, None::<&()>).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send<T: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&T>,
    ) -> Result<Response> {
        let mut request = self.client.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Failed to send {} request to {}", method, url))?;

        ensure_success(response)
    }
}

/// Turn non-2xx responses into errors that carry the status
fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if !status.is_success() {
        anyhow::bail!("{} returned status: {}", response.url().path(), status);
    }
    Ok(response)
}
