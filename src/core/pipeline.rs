use crate::adapters::{read_numbers, HttpProbe};
use crate::core::{ConfigProvider, Pipeline, Report, Storage, Summary};
use crate::domain::services::sum_numbers;
use crate::utils::error::Result;
use reqwest::Client;

pub struct SumPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    probe: HttpProbe,
}

impl<S: Storage, C: ConfigProvider> SumPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self::with_client(storage, config, Client::new())
    }

    pub fn with_client(storage: S, config: C, client: Client) -> Self {
        Self {
            storage,
            config,
            probe: HttpProbe::new(client),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for SumPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<i64>> {
        tracing::debug!("Reading numbers from: {}", self.config.source());
        read_numbers(self.config.source()).await
    }

    async fn transform(&self, numbers: Vec<i64>) -> Result<Summary> {
        let sum = sum_numbers(&numbers)?;
        Ok(Summary { numbers, sum })
    }

    async fn probe(&self) -> Result<u16> {
        self.probe.check(self.config.target_url()).await
    }

    async fn load(&self, report: &Report) -> Result<String> {
        let output_path = self.config.output_path();
        self.storage
            .write_file(output_path, report.to_string().as_bytes())
            .await?;
        Ok(output_path.to_string())
    }

    fn target_url(&self) -> &str {
        self.config.target_url()
    }
}
