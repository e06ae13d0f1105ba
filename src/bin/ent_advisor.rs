

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use ent_advisor::providers::ProviderFactory;
use ent_advisor::{render_response, Advisor, AdvisorConfig, SessionState};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "ent-advisor")]
#[command(about = "Suggest a likely ENT condition and relevant drugs from symptoms")]
struct Cli {
    /// Config file (toml, json or yaml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print the full consultation report as JSON
    #[arg(long)]
    json: bool,
    /// Symptom phrases, e.g. "ear pain" fever
    symptoms: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("ent_advisor=info".parse()?))
        .init();

    let args = Cli::parse();
    let config = AdvisorConfig::load(args.config.as_deref())?;

    let knowledge_provider = ProviderFactory::knowledge(&config)?;
    let artifact_provider = ProviderFactory::artifacts(&config);
    let (knowledge, artifacts) = tokio::try_join!(knowledge_provider.load(), artifact_provider.load())
        .with_context(|| format!("loading from {}", knowledge_provider.source()))?;

    let advisor = Advisor::new(Arc::new(artifacts), Arc::new(knowledge), &config);
    info!("Advisor ready, top_k={}", config.top_k);

    let (_, report) = advisor.consult(SessionState::new(), args.symptoms.as_slice())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_response(&report.outcome));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags_and_symptoms() {
        let cli = Cli::try_parse_from(["ent-advisor", "--json", "--config", "advisor.toml", "ear pain", "fever"])
            .unwrap();
        assert!(cli.json);
        assert_eq!(cli.config, Some(PathBuf::from("advisor.toml")));
        assert_eq!(cli.symptoms, vec!["ear pain", "fever"]);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["ent-advisor", "--jsno", "fever"]).is_err());
    }

    #[test]
    fn test_cli_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["ent-advisor", "--help"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
