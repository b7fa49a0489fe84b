use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct VendorListResponse {
    vendors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct TypeListResponse {
    types: Vec<String>,
}

/// Handle `vlm vendors`.
pub async fn handle_vendors(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let vendors = ctx.service.distinct_vendors().await?;
    output(&VendorListResponse { vendors }, flags.format)
}

/// Handle `vlm types`.
pub async fn handle_types(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let types = ctx.service.distinct_types().await?;
    output(&TypeListResponse { types }, flags.format)
}
