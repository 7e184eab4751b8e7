use anyhow::{Context, Result};
use clap::Parser;

/// tnapps - TrueNAS SCALE application lister
///
/// Lists the applications installed on a TrueNAS SCALE system via its
/// management API.
///
/// If the TNAPPS_API_KEY environment variable is set, it will be used for
/// authentication.
///
/// Examples:
///   tnapps --url http://nas.local list
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the TrueNAS system (also via TNAPPS_URL)
    #[arg(
        long = "url",
        short = 'u',
        env = "TNAPPS_URL",
        value_name = "URL",
        global = true
    )]
    pub url: Option<String>,

    /// API key for the management API (also via TNAPPS_API_KEY)
    #[arg(
        long = "api-key",
        env = "TNAPPS_API_KEY",
        value_name = "KEY",
        hide_env_values = true,
        global = true
    )]
    pub api_key: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// List installed applications
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let url = cli
        .url
        .context("No system URL given. Pass --url or set TNAPPS_URL.")?;

    match cli.command {
        Commands::List(_args) => tnapps::commands::list(&url, cli.api_key.as_deref()).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_list_parsing() {
        let cli = Cli::try_parse_from(["tnapps", "list"]).unwrap();
        match cli.command {
            Commands::List(_) => {}
        }
    }

    #[test]
    fn test_cli_url_parsing() {
        let cli = Cli::try_parse_from(["tnapps", "list", "--url", "http://nas.local"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://nas.local"));
    }

    #[test]
    fn test_cli_global_url_parsing() {
        let cli = Cli::try_parse_from(["tnapps", "--url", "http://nas.local", "list"]).unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://nas.local"));
    }

    #[test]
    fn test_cli_api_key_parsing() {
        let cli =
            Cli::try_parse_from(["tnapps", "list", "--api-key", "secret"]).unwrap();
        assert_eq!(cli.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["tnapps"]);
        assert!(result.is_err());
    }
}
