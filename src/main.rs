use clap::Parser;
use deploy_track::utils::error::ErrorSeverity;
use deploy_track::utils::{logger, validation::Validate};
use deploy_track::{CliConfig, GitLabClient, TrackError, TrackerEngine};

fn exit_code_for(error: &TrackError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report_failure(error: &TrackError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        error,
        error.category(),
        error.severity()
    );
    eprintln!("❌ {}", error.user_friendly_message());
    eprintln!("💡 建議: {}", error.recovery_suggestion());
    std::process::exit(exit_code_for(error));
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting deploy-track");
    if config.verbose {
        tracing::debug!("Checking project {} at {}", config.project, config.url);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    // 連線並驗證 token
    let client = match GitLabClient::connect(&config.url, &config.token).await {
        Ok(client) => client,
        Err(e) => report_failure(&e),
    };

    let engine = TrackerEngine::new(client, config);
    match engine.run().await {
        Ok(outcome) => {
            tracing::info!("✅ Deployment check completed");
            let exit_code = outcome.exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => report_failure(&e),
    }
}
