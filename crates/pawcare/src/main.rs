// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pawcare - command-line client for the Pawcare pet-care service.
//!
//! This is the binary entry point. Each subcommand lives in its own
//! module and receives an [`context::AppContext`] with the configured
//! storage, session, and API client.

use clap::{Parser, Subcommand};
use colored::Colorize;

use pawcare_core::PawcareError;

mod auth;
mod context;
mod diet;
mod pets;
mod products;
mod theme;

/// Pawcare - manage your pets and their weekly diets.
#[derive(Parser, Debug)]
#[command(name = "pawcare", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Log in and store the session locally.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session.
    Logout,
    /// Register a new account.
    Register {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Request a password recovery email.
    Recover {
        #[arg(long)]
        email: String,
    },
    /// Show the profile of the logged-in user.
    Profile,
    /// Manage your pets.
    Pets {
        #[command(subcommand)]
        command: pets::PetsCommands,
    },
    /// Generate or inspect weekly diets.
    Diet {
        #[command(subcommand)]
        command: diet::DietCommands,
    },
    /// List the public product catalog.
    Products,
    /// Show or set the UI theme.
    Theme {
        /// New theme (`light` or `dark`); omit to show the current one.
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match pawcare_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            pawcare_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    let ctx = match context::AppContext::init(config).await {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Login { email, password } => auth::run_login(&ctx, &email, &password).await,
        Commands::Logout => auth::run_logout(&ctx).await,
        Commands::Register {
            first_name,
            last_name,
            address,
            phone,
            email,
            password,
        } => {
            auth::run_register(&ctx, first_name, last_name, address, phone, email, password).await
        }
        Commands::Recover { email } => auth::run_recover(&ctx, &email).await,
        Commands::Profile => auth::run_profile(&ctx).await,
        Commands::Pets { command } => pets::run(&ctx, command).await,
        Commands::Diet { command } => diet::run(&ctx, command).await,
        Commands::Products => products::run_list(&ctx).await,
        Commands::Theme { value } => theme::run(&ctx, value.as_deref()).await,
    };

    // Flush pending writes before reporting the outcome.
    if let Err(e) = ctx.store.flush().await {
        tracing::warn!(error = %e, "storage flush failed on shutdown");
    }

    if let Err(e) = result {
        report_error(&e);
        std::process::exit(1);
    }
}

/// Print a command failure in terms the user can act on.
fn report_error(e: &PawcareError) {
    match e {
        PawcareError::Unauthorized(_) => {
            eprintln!(
                "{} {e}\n{}",
                "error:".red().bold(),
                "Run `pawcare login` to start a session.".dimmed()
            );
        }
        PawcareError::CooldownActive { message } => {
            eprintln!("{} {message}", "cooldown:".yellow().bold());
        }
        _ => {
            eprintln!("{} {e}", "error:".red().bold());
        }
    }
}

/// Initializes the tracing subscriber with the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pawcare={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
