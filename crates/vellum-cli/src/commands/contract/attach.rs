use std::path::Path;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    id: &str,
    file: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let contract = ctx.service.attach_file(id, Path::new(file)).await?;
    output(&contract, flags.format)
}
