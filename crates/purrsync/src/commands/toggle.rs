//! `purrsync toggle <IMAGE_ID>`: flip the local favourite state.

use serde::Serialize;

use purrsync_core::{FavouriteStore, Item};

use crate::cli::{GlobalOpts, OutputFormat, ToggleArgs};
use crate::context::Context;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct Toggled<'a> {
    image_id: &'a str,
    is_favourite: bool,
}

pub async fn handle(ctx: &Context, args: ToggleArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let current = ctx
        .repository
        .store()
        .list_favourite_ids()
        .await?
        .contains(&args.image_id);

    let item = Item::new(args.image_id.as_str(), args.image_id.as_str(), "").with_favourite(current);
    ctx.controller().toggle_favourite(&item).await?;

    let result = Toggled {
        image_id: &args.image_id,
        is_favourite: !current,
    };
    let out = match global.output {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::JsonCompact => serde_json::to_string(&result)?,
        OutputFormat::Plain => result.is_favourite.to_string(),
        OutputFormat::Table if result.is_favourite => format!(
            "{} {} added to favourites",
            output::heart(true, output::should_color(global.color)),
            result.image_id
        ),
        OutputFormat::Table => format!("{} removed from favourites", result.image_id),
    };
    output::print_output(&out, global.quiet)
}
