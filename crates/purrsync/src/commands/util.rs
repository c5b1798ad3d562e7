//! Shared helpers for command handlers.

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use purrsync_core::Effect;

use crate::error::CliError;

/// Drain effects queued during a command.
///
/// The first `ShowError` becomes the command's error; navigation requests
/// have no meaning on the command line and are only logged.
pub fn drain_effects(effects: Option<UnboundedReceiver<Effect>>) -> Result<(), CliError> {
    let Some(mut effects) = effects else {
        return Ok(());
    };

    let mut first_error = None;
    while let Ok(effect) = effects.try_recv() {
        match effect {
            Effect::ShowError { message } => {
                if first_error.is_none() {
                    first_error = Some(message);
                } else {
                    debug!(%message, "additional error effect");
                }
            }
            Effect::Navigate(route) => debug!(%route, "ignoring navigation effect"),
        }
    }

    match first_error {
        Some(message) => Err(CliError::RequestFailed { message }),
        None => Ok(()),
    }
}
