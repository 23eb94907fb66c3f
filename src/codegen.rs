//! sqlc plugin glue: options, INSERT selection and Rust source emission.
//! The heavy lifting happens at runtime in `crate::bulk`; generated code only
//! carries the statement text and field order.

use anyhow::{Context, Result};
use tracing::info;

pub mod emit;
pub mod options;
pub mod plan;
pub mod request;

pub use emit::render_module;
pub use options::Options;
pub use plan::{build_bulk_inserts, BulkInsert};
pub use request::{Column, File, GenerateRequest, GenerateResponse, Parameter, Query};

/// Run one generation request. No qualifying INSERT statements means an empty
/// response, not an error.
pub fn generate(req: &GenerateRequest) -> Result<GenerateResponse> {
    let opts = Options::parse(&req.plugin_options)?;
    opts.validate()?;
    let multiplier = opts.multiplier()?;

    let inserts = build_bulk_inserts(req, &multiplier);
    if inserts.is_empty() {
        info!(target: "sqlc_gen_bulk::codegen", "no bulk insert candidates among {} queries", req.queries.len());
        return Ok(GenerateResponse::default());
    }

    let contents = render_module(&req.sqlc_version, &opts, &multiplier, &inserts)
        .with_context(|| format!("failed to render {}", opts.output))?;
    info!(target: "sqlc_gen_bulk::codegen", "generated {} bulk insert(s) into {}", inserts.len(), opts.output);
    Ok(GenerateResponse { files: vec![File { name: opts.output.clone(), contents }] })
}
