use bhavana_core::ModelChoice;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bhavana-demo")]
#[command(
    author,
    version,
    about = "Interactive Nepali sentiment analysis demo"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the demo server with the web form
    Serve {
        /// Listen port
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Listen address
        #[arg(short, long, default_value = "127.0.0.1")]
        address: String,

        /// Directory holding the three artifact files
        #[arg(short, long, default_value = "./models")]
        models_dir: String,

        /// Artifact config file (overrides --models-dir)
        #[arg(long)]
        config: Option<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Predict the sentiment of one text on the command line
    Predict {
        /// The Nepali text to classify
        text: String,

        /// Model to predict with: svm or naive-bayes
        #[arg(long, default_value = "svm", value_parser = parse_model)]
        model: ModelChoice,

        /// Directory holding the three artifact files
        #[arg(short, long, default_value = "./models")]
        models_dir: String,

        /// Artifact config file (overrides --models-dir)
        #[arg(long)]
        config: Option<String>,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

fn parse_model(s: &str) -> Result<ModelChoice, String> {
    s.parse()
}
