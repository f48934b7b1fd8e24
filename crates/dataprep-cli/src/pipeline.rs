//! The end-to-end import pipeline driven by the CLI.
//!
//! Stages run in a fixed order: ingest, map, transform, cleanup, validate,
//! review. Presets replay recorded mapping, transformations, and cleanup
//! actions; without a preset the pipeline stops after inference and
//! validation of the raw data.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use dataprep_cleanup::CleanupSession;
use dataprep_ingest::{read_csv_path, write_csv_path};
use dataprep_map::{MappingState, MappingSummary};
use dataprep_model::{
    CleanupAction, ColumnMapping, Dataset, Preset, Transformation, ValidationIssue,
};
use dataprep_report::{ReviewSummary, summarize};
use dataprep_transform::TransformSession;
use dataprep_validate::validate;

/// What the import pipeline produced, for display and exit-code decisions.
pub struct ImportResult {
    pub source: PathBuf,
    pub dataset: Dataset,
    pub mapping: ColumnMapping,
    pub mapping_summary: MappingSummary,
    pub transformations: Vec<Transformation>,
    pub cleanup_actions: Vec<CleanupAction>,
    pub issues: Vec<ValidationIssue>,
    pub review: ReviewSummary,
    /// Where the cleaned dataset was written, unless this was a dry run.
    pub output: Option<PathBuf>,
}

/// Loads a preset bundle from a JSON file.
pub fn load_preset(path: &Path) -> Result<Preset> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("read preset {}", path.display()))?;
    let preset: Preset = serde_json::from_str(&raw)
        .with_context(|| format!("parse preset {}", path.display()))?;
    info!(
        mappings = preset.mapping.mapped_count(),
        transformations = preset.transformations.len(),
        cleanup = preset.cleanup_actions.len(),
        "preset loaded"
    );
    Ok(preset)
}

/// Runs the full pipeline over one CSV file.
pub fn run_import(
    source: &Path,
    preset: Option<&Preset>,
    output: Option<&Path>,
    dry_run: bool,
) -> Result<ImportResult> {
    let span = info_span!("import", file = %source.display());
    let _guard = span.enter();

    let dataset = read_csv_path(source).with_context(|| format!("read {}", source.display()))?;
    info!(
        rows = dataset.row_count(),
        columns = dataset.column_count(),
        "ingested"
    );

    let mapping_state = match preset {
        Some(preset) => MappingState::from_mapping(preset.mapping.clone(), &dataset.columns),
        None => MappingState::infer(&dataset.columns),
    };
    let mapping_summary = mapping_state.summary();
    for field in mapping_state.missing_required() {
        warn!(field, "required field has no mapped column");
    }

    let mut transform = TransformSession::new(dataset);
    if let Some(preset) = preset {
        for recorded in &preset.transformations {
            if transform.apply_recorded(recorded.clone()).is_none() {
                warn!(op = recorded.kind.display_name(), "recorded transformation skipped");
            }
        }
    }

    let mut cleanup = CleanupSession::new(transform.current().clone());
    if let Some(preset) = preset {
        for recorded in &preset.cleanup_actions {
            if cleanup.apply_recorded(recorded.clone()).is_none() {
                warn!(column = %recorded.column, "recorded cleanup action skipped");
            }
        }
    }

    let dataset = cleanup.current().clone();
    let mapping = mapping_state.into_mapping();
    let issues = validate(&dataset, &mapping);
    let review = summarize(
        &dataset,
        &mapping,
        transform.transformations(),
        cleanup.actions(),
        &issues,
    );

    let output = if dry_run {
        None
    } else {
        let path = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(source));
        write_csv_path(&path, &dataset).with_context(|| format!("write {}", path.display()))?;
        info!(path = %path.display(), "cleaned dataset written");
        Some(path)
    };

    Ok(ImportResult {
        source: source.to_path_buf(),
        dataset,
        mapping,
        mapping_summary,
        transformations: transform.transformations().to_vec(),
        cleanup_actions: cleanup.actions().to_vec(),
        issues,
        review,
        output,
    })
}

/// `inventory.csv` becomes `inventory_clean.csv` next to the source.
fn default_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "dataset".to_string());
    source.with_file_name(format!("{stem}_clean.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_the_source() {
        let path = default_output_path(Path::new("/data/inventory.csv"));
        assert_eq!(path, PathBuf::from("/data/inventory_clean.csv"));
    }
}
