//! Schema command — print the JSON schema of the quality report.
//!
//! Downstream exporters and publishing tools validate against this schema.

use clap::Args;
use tracing::instrument;

use maqal_lint_core::QualityReport;

/// Arguments for the `schema` subcommand.
#[derive(Args, Debug)]
pub struct SchemaArgs {}

/// Print the [`QualityReport`] JSON schema.
#[instrument(name = "cmd_schema", skip_all)]
pub fn cmd_schema(_args: SchemaArgs) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(QualityReport);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
