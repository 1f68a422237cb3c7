use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::cli::{login, tour};
use crate::config::Initializer;
use crate::core::{self, SessionStore};

/// Sessiongate command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct SessiongateCommand {
    /// Session options
    #[command(flatten)]
    pub options: SessionOptions,
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Session options
#[derive(Args, Debug)]
pub struct SessionOptions {
    /// Configuration file path
    #[arg(
        long,
        short = 'C',
        default_value = "./files/config.yaml",
        env = "SESSIONGATE_CONFIG_PATH",
        global = true
    )]
    pub config: PathBuf,
    /// Simulated credential verification latency
    #[arg(long, env = "SESSIONGATE_VERIFY_LATENCY_MILLISECONDS", global = true)]
    pub verify_latency_milliseconds: Option<u64>,
    /// Upper bound of random latency added to each verification
    #[arg(long, env = "SESSIONGATE_VERIFY_JITTER_MILLISECONDS", global = true)]
    pub verify_jitter_milliseconds: Option<u64>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in once and show the resulting screen
    Login(login::LoginCommand),
    /// Walk through login, dashboard, profile and logout
    Tour(tour::TourCommand),
}

/// Parse command line args
pub fn parse() -> SessiongateCommand {
    SessiongateCommand::parse()
}

/// Load config and build the session store
pub async fn initialize(options: SessionOptions) -> crate::Result<SessionStore> {
    let SessionOptions {
        config,
        verify_latency_milliseconds,
        verify_jitter_milliseconds,
    } = options;

    let mut initializer = Initializer::load_config_file(config).await?;

    let mut overrides = {
        let mut config = core::Config::default();
        config.set_verify_latency_milliseconds(verify_latency_milliseconds);
        config.set_verify_jitter_milliseconds(verify_jitter_milliseconds);
        config
    };
    initializer.override_merge(&mut overrides);

    initializer.build_store()
}
