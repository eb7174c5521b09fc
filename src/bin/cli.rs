//! Helium CLI
//!
//! Command-line interface for Helium operations:
//! - Show the resolved environment
//! - Request a password reset email
//! - Look up the support URL
//! - Check that a running site serves the planner
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use helium::api::PlannerClient;
use helium::config::{generate_default_config, Config};
use helium::environment::{Endpoints, Environment};
use helium::flows::driver;
use helium::flows::support::SupportOutcome;
use helium::logging::init_logging;
use helium::smoke::SmokeCheck;

#[derive(Parser)]
#[command(name = "helium-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tools for the Helium Student Planner client")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL (overrides the environment's default)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Environment: dev, test or prod
    #[arg(short, long, global = true)]
    pub environment: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the resolved environment and URLs
    Env {
        /// Resolve from a page location instead, e.g. https://www.heliumedu.com/
        #[arg(long)]
        site_url: Option<String>,
    },

    /// Email a temporary password
    Forgot {
        /// Account email address
        email: String,
    },

    /// Print the support URL
    Support,

    /// Check that a site serves the planner's root page
    Check {
        /// Page to load (default: from config)
        url: Option<String>,
        /// Seconds to wait for the title
        #[arg(short, long)]
        timeout: Option<u64>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn endpoints(cli: &Cli, config: &Config) -> Endpoints {
    let environment = match cli.environment.as_deref() {
        Some(name) => Environment::from_name(name),
        None => config.environment.environment(),
    };
    let endpoints = Endpoints::for_environment(environment);

    match cli
        .api_url
        .as_deref()
        .or(config.environment.api_url.as_deref())
    {
        Some(url) if !url.is_empty() => endpoints.with_api_url(url),
        _ => endpoints,
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load_default();
    init_logging(&config.logging);

    match &cli.command {
        Commands::Env { site_url } => {
            let endpoints = match site_url {
                Some(site) => {
                    let environment = Environment::from_site_url(site);
                    Endpoints {
                        environment,
                        site_url: site.clone(),
                        api_url: environment.api_url().to_string(),
                    }
                }
                None => endpoints(&cli, &config),
            };
            println!("Environment: {}", endpoints.environment);
            println!("Site URL:    {}", endpoints.site_url);
            println!("API URL:     {}", endpoints.api_url);
        }

        Commands::Forgot { email } => {
            let client = PlannerClient::new(endpoints(&cli, &config), config.client.options())?;
            let status = driver::forgot_password(&client, email).await;

            if status.has_class("alert-warning") {
                eprintln!("{}", status.html());
                std::process::exit(1);
            }
            println!("{}", status.html());
        }

        Commands::Support => {
            let client = PlannerClient::new(endpoints(&cli, &config), config.client.options())?;
            match driver::support(&client).await {
                SupportOutcome::Redirect(url) => println!("{}", url),
                SupportOutcome::Failed(message) => {
                    eprintln!("{}", message.text);
                    std::process::exit(1);
                }
            }
        }

        Commands::Check { url, timeout } => {
            let mut check = SmokeCheck::from(&config.smoke);
            if let Some(url) = url {
                check.url = url.clone();
            }
            if let Some(secs) = timeout {
                check.timeout = std::time::Duration::from_secs(*secs);
            }

            match check.run().await {
                Ok(title) => println!("OK: {}", title),
                Err(e) => {
                    eprintln!("Check failed for {}: {}", check.url, e);
                    eprintln!();
                    eprintln!("Make sure the dev server is running:");
                    eprintln!("  cargo run --bin helium");
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_matches_binary_name() {
        Cli::command().debug_assert();
        assert_eq!(Cli::command().get_name(), "helium-cli");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["helium-cli", "check", "--environment", "test", "-t", "5"])
            .unwrap();
        assert_eq!(cli.environment.as_deref(), Some("test"));
        assert!(matches!(cli.command, Commands::Check { timeout: Some(5), .. }));
    }
}
