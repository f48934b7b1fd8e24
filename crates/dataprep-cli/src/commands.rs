//! Subcommand implementations.

use anyhow::{Context, Result};
use tracing::info;

use dataprep_cli::pipeline::{ImportResult, load_preset, run_import};
use dataprep_ingest::read_csv_path;
use dataprep_map::MappingState;

use crate::cli::{ImportArgs, MapArgs};
use crate::summary::{MappingView, print_fields, print_mapping};

pub fn run_fields() {
    print_fields();
}

pub fn run_map(args: &MapArgs) -> Result<()> {
    let dataset =
        read_csv_path(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    let state = MappingState::infer(&dataset.columns);
    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        mapped = state.summary().mapped,
        "mapping inferred"
    );
    print_mapping(&MappingView {
        mapping: state.mapping(),
        unmapped: state
            .unmapped_columns()
            .into_iter()
            .map(ToString::to_string)
            .collect(),
        missing_required: state.missing_required(),
    });
    Ok(())
}

pub fn run_pipeline(args: &ImportArgs) -> Result<ImportResult> {
    let preset = match &args.preset {
        Some(path) => Some(load_preset(path)?),
        None => None,
    };
    run_import(
        &args.file,
        preset.as_ref(),
        args.output.as_deref(),
        args.dry_run,
    )
}
