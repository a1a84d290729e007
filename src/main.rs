//! Command-line administration of domain aliases.
//!
//! # Usage
//!
//! ```bash
//! # Add an alias for domain `example_com`
//! domain-alias add-alias example_com www.example.com
//!
//! # Same, via the short alias, in the staging environment, inactive, redirecting
//! domain-alias daa example_com staging.example.com staging --inactive --redirect 302
//!
//! # List stored aliases
//! domain-alias list-aliases
//! domain-alias list-aliases --json
//! ```
//!
//! # Environment Variables
//!
//! See [`domain_alias::config`]. `ALIAS_STORE=memory` runs without a database.

use domain_alias::application::services::AliasRegistrar;
use domain_alias::config::{self, Config};
use domain_alias::domain::entities::{AddAliasRequest, DomainAlias, Environment};
use domain_alias::domain::repositories::AliasStoreProvider;
use domain_alias::infrastructure::persistence::BackendStoreProvider;
use domain_alias::utils::PatternSyntaxValidator;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing domain aliases.
#[derive(Parser)]
#[command(name = "domain-alias")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new domain alias
    #[command(name = "add-alias", visible_alias = "daa")]
    AddAlias {
        /// ID of the domain to add the alias to
        domain_id: String,

        /// Hostname pattern of the alias
        pattern: String,

        /// Environment the alias is created in (default, local, development, staging, testing)
        #[arg(default_value = Environment::DEFAULT)]
        environment: String,

        /// Create the alias with inactive status
        #[arg(long)]
        inactive: bool,

        /// Redirect status for the alias (301 or 302)
        #[arg(long, value_parser = clap::value_parser!(u16).range(301..=302))]
        redirect: Option<u16>,
    },

    /// List stored domain aliases
    #[command(name = "list-aliases", visible_alias = "dal")]
    ListAliases {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let mut registrar = AliasRegistrar::new(BackendStoreProvider::new(config.store_config()));
    if config.validate_patterns {
        registrar = registrar.with_validator(Arc::new(PatternSyntaxValidator::new()));
    }

    match cli.command {
        Commands::AddAlias {
            domain_id,
            pattern,
            environment,
            inactive,
            redirect,
        } => {
            let request = AddAliasRequest::new(domain_id, pattern)
                .environment(environment)
                .inactive(inactive)
                .redirect(redirect);
            add_alias(&registrar, request).await?
        }
        Commands::ListAliases { json } => list_aliases(&registrar, json).await?,
    }

    Ok(())
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// command output.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Admits a new alias and reports it.
async fn add_alias<P: AliasStoreProvider>(
    registrar: &AliasRegistrar<P>,
    request: AddAliasRequest,
) -> Result<()> {
    let alias = registrar.add_alias(request).await?;

    println!(
        "{} {} {} {}",
        "✅ Created alias".green().bold(),
        alias.id.cyan(),
        "for domain".green(),
        alias.domain_id.cyan()
    );
    print_alias_details(&alias);

    Ok(())
}

fn print_alias_details(alias: &DomainAlias) {
    println!("  Pattern:     {}", alias.pattern.bright_white());
    println!("  Environment: {}", alias.environment.bright_white());
    println!("  Status:      {}", status_label(alias));
    println!("  Redirect:    {}", redirect_label(alias).bright_white());
}

/// Lists all aliases.
///
/// # Output Format
///
/// ```text
/// 📋 Domain Aliases
///
///   ID                        Pattern                   Domain          Environment  Redirect Status
///   ───────────────────────────────────────────────────────────────────────────────────────────────────
///   www_example_com           www.example.com           example_com     default      301      ACTIVE
/// ```
async fn list_aliases<P: AliasStoreProvider>(
    registrar: &AliasRegistrar<P>,
    json: bool,
) -> Result<()> {
    let aliases = registrar.list_aliases().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&aliases)?);
        return Ok(());
    }

    println!("{}", "📋 Domain Aliases".bright_blue().bold());
    println!();

    if aliases.is_empty() {
        println!("{}", "  No aliases found".yellow());
        println!();
        println!(
            "  Create one with: {} <domain_id> <pattern>",
            "domain-alias add-alias".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<25} {:<25} {:<15} {:<12} {:<8} {}",
        "ID".bright_white().bold(),
        "Pattern".bright_white().bold(),
        "Domain".bright_white().bold(),
        "Environment".bright_white().bold(),
        "Redirect".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(99).bright_black());

    for alias in &aliases {
        println!(
            "  {:<25} {:<25} {:<15} {:<12} {:<8} {}",
            alias.id.bright_black(),
            alias.pattern.cyan(),
            alias.domain_id,
            alias.environment,
            redirect_label(alias),
            status_label(alias)
        );
    }

    println!();
    println!(
        "  Total: {}",
        aliases.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

fn status_label(alias: &DomainAlias) -> ColoredString {
    if alias.is_active() {
        "ACTIVE".green()
    } else {
        "INACTIVE".red()
    }
}

fn redirect_label(alias: &DomainAlias) -> String {
    alias
        .redirect
        .map(|code| code.to_string())
        .unwrap_or_else(|| "-".to_string())
}
