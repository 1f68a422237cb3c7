mod root;
pub use root::{initialize, parse, Command, SessionOptions, SessiongateCommand};

pub mod login;
pub mod tour;

use std::io::Write;

use crate::navigation::Navigator;

// One line describing what a rendering layer would currently show.
pub(crate) fn render(navigator: &Navigator) -> String {
    let tree = navigator.tree();
    let screen = navigator.current();
    match navigator.store().current_user() {
        Some(user) => format!("[{}] {} ({})", tree, screen, user.display_name()),
        None => format!("[{}] {}", tree, screen),
    }
}

pub(crate) fn print_pending_tick() {
    let mut stderr = std::io::stderr();
    let _ = write!(stderr, ".");
    let _ = stderr.flush();
}
