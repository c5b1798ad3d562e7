//! `purrsync cats`: one page of images with favourite markers.

use crate::cli::{CatsArgs, GlobalOpts};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

use super::util;

pub async fn handle(ctx: &Context, args: CatsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let controller = ctx.controller();
    let effects = controller.take_effects();

    controller.load(args.page).await;
    controller.settle().await;
    util::drain_effects(effects)?;

    let state = controller.snapshot();
    let out = output::render_items(
        global.output,
        &state.items,
        output::should_color(global.color),
    )?;
    output::print_output(&out, global.quiet)
}
