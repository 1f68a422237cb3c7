use clap::Args;
use serde::Serialize;
use tokio::time::{interval, Duration};

use crate::cli::{print_pending_tick, render};
use crate::common::{info, Error};
use crate::core::{Credentials, SessionStore, User};
use crate::navigation::{NavigationTree, Navigator, Screen};
use crate::{Result, SessiongateError};

/// Sign in once
#[derive(Args, Debug)]
pub struct LoginCommand {
    /// Account identifier (email)
    #[arg(long, env = "SESSIONGATE_IDENTIFIER")]
    identifier: String,
    /// Account secret
    #[arg(long, env = "SESSIONGATE_SECRET", hide_env_values = true)]
    secret: String,
    /// Print the signed in user as json
    #[arg(long)]
    json: bool,
}

impl LoginCommand {
    pub async fn run(self, store: SessionStore) -> Result<()> {
        let LoginCommand {
            identifier,
            secret,
            json,
        } = self;

        // Reject empty input before the store sees it.
        let credentials = Credentials::new(identifier, secret)?;

        let navigator = Navigator::new(store.clone());
        println!("{}", render(&navigator));

        login_with_indicator(&store, credentials).await?;

        let user = store.current_user();
        info!(user=?user.as_ref().map(|u| u.id()), "Signed in");

        if json {
            let output = Output {
                user: user.as_ref(),
                tree: navigator.tree(),
                screen: navigator.current(),
            };
            let out = serde_json::to_string_pretty(&output).map_err(Error::from)?;
            println!("{}", out);
        } else {
            println!("{}", render(&navigator));
        }

        Ok(())
    }
}

#[derive(Serialize)]
struct Output<'a> {
    user: Option<&'a User>,
    tree: NavigationTree,
    screen: Screen,
}

// Await the login while ticking a pending indicator on stderr.
pub(crate) async fn login_with_indicator(
    store: &SessionStore,
    credentials: Credentials,
) -> Result<()> {
    let login = store.login_with(credentials);
    tokio::pin!(login);

    let mut ticker = interval(Duration::from_millis(200));
    eprint!("signing in");
    let result = loop {
        tokio::select! {
            result = &mut login => break result,
            _ = ticker.tick() => print_pending_tick(),
        }
    };
    eprintln!();

    result.map_err(SessiongateError::from)
}
