use crate::core::{Pipeline, Report};
use crate::domain::model::NumberList;
use crate::utils::error::Result;

const HTTP_OK: u16 = 200;

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: Report,
    pub output_path: String,
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs read, sum, probe and write in order; the first error stops the run.
    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Program started");

        let numbers = self.pipeline.extract().await?;
        tracing::info!("Numbers: {}", NumberList(&numbers));

        let summary = self.pipeline.transform(numbers).await?;
        tracing::info!("Sum: {}", summary.sum);

        let url = self.pipeline.target_url();
        let status = self.pipeline.probe().await?;
        tracing::info!("HTTP GET to '{}', response status: {}", url, status);

        if status == HTTP_OK {
            tracing::info!("Request succeeded (status 200)");
        } else {
            tracing::warn!("Unexpected response status: {}", status);
        }

        let report = Report::new(summary, status);
        let output_path = self.pipeline.load(&report).await?;
        tracing::info!("Result saved to: {}", output_path);
        tracing::info!("Program finished successfully");

        Ok(RunOutcome {
            report,
            output_path,
        })
    }
}
