use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use client_meta::{ClientMetadata, HeaderParser, MetaConfig};
use tracing::{debug, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser, Debug)]
#[command(name = "client-meta")]
#[command(about = "Decode Client-Meta-Information headers")]
struct Cli {
    /// JSON configuration with `header`, `platforms` and `environments` keys.
    #[arg(short, long, global = true, env = "CLIENT_META_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a header value and print the decoded metadata.
    Parse {
        header: String,
        #[arg(short, long, value_enum, default_value_t = Output::Json)]
        output: Output,
    },
    /// Print the default configuration.
    Defaults,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Output {
    Json,
    Header,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<MetaConfig> {
    match path {
        Some(path) => MetaConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {:?}", path)),
        None => {
            debug!("No config given, using defaults");
            Ok(MetaConfig::default())
        }
    }
}

fn decode(parser: &HeaderParser, header: &str) -> client_meta::Result<ClientMetadata> {
    Ok(parser.parse(Some(header))?)
}

fn run(cli: &Cli) -> anyhow::Result<String> {
    match &cli.command {
        Command::Parse { header, output } => {
            let parser = HeaderParser::new(load_config(cli.config.as_ref())?);
            let meta = decode(&parser, header)?;
            info!("Decoded {} client ({})", meta.platform(), meta.environment());
            match output {
                Output::Json => Ok(serde_json::to_string_pretty(&meta)?),
                Output::Header => Ok(meta.to_header_string()),
            }
        }
        Command::Defaults => Ok(serde_json::to_string_pretty(&MetaConfig::default())?),
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    println!("{}", run(&cli)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_args() {
        let cli = Cli::try_parse_from(["client-meta", "parse", "web;production", "-o", "header"]).unwrap();
        match cli.command {
            Command::Parse { header, output } => {
                assert_eq!(header, "web;production");
                assert_eq!(output, Output::Header);
            }
            Command::Defaults => panic!("expected parse command"),
        }
    }

    #[test]
    fn test_run_header_output() {
        let cli = Cli::try_parse_from(["client-meta", "parse", "ios;local;1.0.0;10.1;iphone-x", "--output", "header"]).unwrap();
        assert_eq!(run(&cli).unwrap(), "ios;local;1.0.0;10.1;iphone-x");
    }

    #[test]
    fn test_run_json_output() {
        let cli = Cli::try_parse_from(["client-meta", "parse", "web;staging"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
        assert_eq!(json["version"], "0.0.0");
        assert_eq!(json["device"], serde_json::Value::Null);
    }

    #[test]
    fn test_run_rejects_invalid_header() {
        let cli = Cli::try_parse_from(["client-meta", "parse", "ios;production"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(err.to_string().contains("Missing version"));
    }

    #[test]
    fn test_decode_keeps_reason() {
        let err = decode(&HeaderParser::default(), "ios;production;1.0.0").unwrap_err();
        assert_eq!(err.reason(), Some(client_meta::Reason::MissingDeviceOsVersion));

        let cli = Cli::try_parse_from(["client-meta", "parse", "ios;local;1.x.0;1;d"]).unwrap();
        let err = run(&cli).unwrap_err();
        let err = err.downcast_ref::<client_meta::MetaError>().unwrap();
        assert_eq!(err.reason(), Some(client_meta::Reason::InvalidMinor));
    }

    #[test]
    fn test_run_defaults() {
        let cli = Cli::try_parse_from(["client-meta", "defaults"]).unwrap();
        let json: serde_json::Value = serde_json::from_str(&run(&cli).unwrap()).unwrap();
        assert_eq!(json["header"], "Client-Meta-Information");
        assert_eq!(json["platforms"], serde_json::json!(["android", "ios", "web"]));
    }
}
