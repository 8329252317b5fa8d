use crate::domain::model::{NumberSource, Report, Summary};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source(&self) -> &NumberSource;
    fn output_path(&self) -> &str;
    fn target_url(&self) -> &str;
}

/// The stages of one run, called in order by the engine.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<i64>>;
    async fn transform(&self, numbers: Vec<i64>) -> Result<Summary>;
    async fn probe(&self) -> Result<u16>;
    async fn load(&self, report: &Report) -> Result<String>;

    fn target_url(&self) -> &str;
}
