use std::path::Path;
use sum_report::utils::{logger, validation::Validate};
use sum_report::{
    CliConfig, EnvConfig, LocalStorage, ReportEngine, ReportError, RunConfig, SumPipeline,
};

/// Runs before the async runtime exists, so exporting the env file touches a single thread.
fn load_config(cli: &CliConfig) -> Result<RunConfig, ReportError> {
    let env = EnvConfig::load(&cli.config)?;
    let config = RunConfig::from_parts(cli, env);
    config.validate()?;
    Ok(config)
}

/// Nothing is logged yet, so the error only goes to the terminal.
fn exit_before_logger(context: &str, e: &ReportError) -> ! {
    eprintln!("❌ {}: {}", context, e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    let cli = CliConfig::from_env_args();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => exit_before_logger("Failed to load configuration", &e),
    };

    if let Err(e) = logger::init_file_logger(Path::new(&config.log_path), cli.verbose) {
        exit_before_logger("Failed to initialize logger", &e);
    }
    tracing::debug!("Run config: {:?}", config);

    run(config);
}

#[tokio::main]
async fn run(config: RunConfig) {
    let pipeline = SumPipeline::new(LocalStorage::default(), config);
    let engine = ReportEngine::new(pipeline);

    match engine.run().await {
        Ok(outcome) => {
            println!(
                "✅ Completed successfully. Result saved to: {}",
                outcome.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?}, HTTP status: {})",
                e,
                e.category(),
                e.severity(),
                e.http_status()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("HTTP status: {}", e.http_status());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
