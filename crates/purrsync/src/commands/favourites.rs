//! `purrsync favourites`: the remote favourites of one user.

use crate::cli::{FavouritesArgs, GlobalOpts};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(
    ctx: &Context,
    args: FavouritesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let user_id = args.user.unwrap_or_else(|| ctx.config.user_id.clone());
    let controller = ctx.controller();
    let effects = controller.take_effects();

    controller.load_favourites(&user_id).await;
    controller.settle().await;
    util::drain_effects(effects)?;

    let state = controller.snapshot();
    let out = output::render_items(
        global.output,
        &state.favourites,
        output::should_color(global.color),
    )?;
    output::print_output(&out, global.quiet)
}
