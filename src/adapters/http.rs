use crate::utils::error::Result;
use reqwest::Client;

/// Single GET against a configured URL, reporting only the status code.
#[derive(Debug, Clone, Default)]
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn check(&self, url: &str) -> Result<u16> {
        tracing::debug!("Making GET request to: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);
        Ok(status.as_u16())
    }
}

pub async fn check_url(url: &str) -> Result<u16> {
    HttpProbe::default().check(url).await
}
