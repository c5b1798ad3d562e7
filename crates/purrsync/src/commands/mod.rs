//! Command dispatch: bridges CLI args -> controller commands -> output formatting.

pub mod cats;
pub mod config_cmd;
pub mod favourites;
pub mod toggle;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::context::Context;
use crate::error::CliError;

/// Dispatch a data command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &Context, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Cats(args) => cats::handle(ctx, args, global).await,
        Command::Favourites(args) => favourites::handle(ctx, args, global).await,
        Command::Toggle(args) => toggle::handle(ctx, args, global).await,
        Command::Config(args) => config_cmd::handle(args, global),
    }
}
