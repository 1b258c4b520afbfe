use bhavana_classifiers::{ArtifactConfig, ArtifactLoader, ArtifactPaths, SentimentPipeline};
use bhavana_demo::cli::{Cli, Commands};
use bhavana_demo::server::run_server;
use bhavana_demo::state::AppState;
use clap::Parser;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            port,
            address,
            models_dir,
            config,
            verbose,
        } => {
            // Initialize logging
            init_logging(verbose);

            let paths = resolve_artifact_paths(&models_dir, config.as_deref())?;
            let loader = ArtifactLoader::new(paths);

            // All three artifacts must load; there is no degraded mode.
            let pipeline = SentimentPipeline::from_loader(&loader)
                .map_err(|e| anyhow::anyhow!("cannot start without artifacts: {e}"))?;

            let addr: SocketAddr = format!("{}:{}", address, port).parse()?;

            println!();
            println!("  Bhavana - Nepali Sentiment Analysis");
            println!("  Models:    SVM, Naive Bayes");
            println!("  Artifacts: {}", models_dir);
            println!();
            println!("  Open http://{} in your browser", addr);
            println!();

            run_server(AppState::new(pipeline), addr).await?;
        }

        Commands::Predict {
            text,
            model,
            models_dir,
            config,
            verbose,
        } => {
            init_logging(verbose);

            let paths = resolve_artifact_paths(&models_dir, config.as_deref())?;
            let loader = ArtifactLoader::new(paths);
            let pipeline = SentimentPipeline::from_loader(&loader)
                .map_err(|e| anyhow::anyhow!("cannot predict without artifacts: {e}"))?;

            let prediction = pipeline.predict(&text, model)?;

            println!("Model:     {}", prediction.model);
            println!("Label:     {}", prediction.label);
            println!("Sentiment: {}", prediction.display_text);
        }
    }

    Ok(())
}

fn resolve_artifact_paths(models_dir: &str, config: Option<&str>) -> anyhow::Result<ArtifactPaths> {
    match config {
        Some(path) => Ok(ArtifactConfig::from_file(path)?.to_paths()),
        None => Ok(ArtifactPaths::from_dir(models_dir)),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "bhavana_demo=debug,bhavana_classifiers=debug,tower_http=debug"
    } else {
        "bhavana_demo=info,bhavana_classifiers=info,tower_http=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
