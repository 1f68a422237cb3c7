use clap::Args;
use tracing_futures::Instrument;

use crate::cli::login::login_with_indicator;
use crate::cli::render;
use crate::common::info;
use crate::core::{Credentials, SessionStore};
use crate::navigation::{Navigator, Screen};
use crate::Result;

/// Scripted walk through both navigation trees
#[derive(Args, Debug)]
pub struct TourCommand {
    /// Account identifier (email)
    #[arg(long, env = "SESSIONGATE_IDENTIFIER", default_value = "user@example.com")]
    identifier: String,
    /// Account secret
    #[arg(
        long,
        env = "SESSIONGATE_SECRET",
        default_value = "password123",
        hide_env_values = true
    )]
    secret: String,
}

impl TourCommand {
    pub async fn run(self, store: SessionStore) -> Result<()> {
        let span = tracing::info_span!("tour", user = %self.identifier);
        self.run_inner(store).instrument(span).await
    }

    async fn run_inner(self, store: SessionStore) -> Result<()> {
        let credentials = Credentials::new(self.identifier, self.secret)?;
        let mut navigator = Navigator::new(store.clone());
        step(&navigator, "start");

        login_with_indicator(&store, credentials).await?;
        navigator.sync();
        step(&navigator, "login");

        navigator.navigate(Screen::Profile)?;
        step(&navigator, "open profile");

        navigator.navigate(Screen::Dashboard)?;
        step(&navigator, "open dashboard");

        navigator.navigate(Screen::Profile)?;
        step(&navigator, "open profile");

        store.logout();
        navigator.sync();
        step(&navigator, "logout");

        info!("Tour finished");
        Ok(())
    }
}

fn step(navigator: &Navigator, label: &str) {
    println!("{:<16} {}", label, render(navigator));
}
