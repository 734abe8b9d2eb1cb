//! Per-table pipeline: read, build, analyze, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use sttgen_codegen::{Artifact, Backend, BuildMetadata, helpers};
use sttgen_core::{Finding, StateGraph};
use tracing::{debug, error, info, info_span, warn};

use crate::config::Config;
use crate::error::RunError;
use crate::table;

/// What one successfully processed table produced.
#[derive(Debug, Clone)]
pub struct TableReport {
    pub table: String,
    /// Files written, or that would have been written in a dry run.
    pub files: Vec<PathBuf>,
    pub findings: Vec<Finding>,
}

/// Outcome of every discovered table, in discovery order.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(PathBuf, Result<TableReport, RunError>)>,
}

impl RunSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|(_, r)| r.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// Processes every table in the input directory.
///
/// Only a failure to list the input directory is returned as an error;
/// table failures are logged and recorded in the summary.
pub fn run(config: &Config, meta: &dyn BuildMetadata) -> Result<RunSummary, RunError> {
    let tables = table::discover(&config.input_dir)?;
    if tables.is_empty() {
        warn!(dir = %config.input_dir.display(), "no .csv tables found");
    }

    let mut summary = RunSummary::default();
    for path in tables {
        let outcome = process_table(&path, config, meta);
        match &outcome {
            Ok(report) => info!(
                table = %report.table,
                files = report.files.len(),
                "table generated"
            ),
            Err(err) => error!("{err}"),
        }
        summary.outcomes.push((path, outcome));
    }

    info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "run complete"
    );
    Ok(summary)
}

/// Processes one table. Nothing is written unless the table validates.
pub fn process_table(
    path: &Path,
    config: &Config,
    meta: &dyn BuildMetadata,
) -> Result<TableReport, RunError> {
    let table = table::read(path)?;
    let _span = info_span!("table", name = %table.name).entered();
    info!(path = %path.display(), rows = table.rows.len(), "reading");

    let graph = StateGraph::build(&table.rows).map_err(|source| RunError::Table {
        table: table.name.clone(),
        source,
    })?;
    for (id, _) in graph.states() {
        debug!("{}", graph.summary(id));
    }

    let findings = sttgen_core::analyze(&graph);
    for finding in &findings {
        warn!("{finding}");
    }

    let project = helpers::project_name(&table.name);
    let rendered: Vec<(&Backend, Vec<Artifact>)> = config
        .backends
        .iter()
        .map(|backend| (backend, sttgen_codegen::render(&graph, &table.name, backend, meta)))
        .collect();

    let mut files = Vec::new();
    for (backend, artifacts) in rendered {
        let dir = config.output_dir.join(backend.output_dir(project));
        if !config.dry_run {
            fs::create_dir_all(&dir).map_err(|e| RunError::io(&dir, e))?;
        }
        for artifact in artifacts {
            let file = dir.join(&artifact.file_name);
            if !config.dry_run {
                fs::write(&file, &artifact.contents).map_err(|e| RunError::io(&file, e))?;
            }
            info!(backend = %backend, file = %file.display(), "generated");
            files.push(file);
        }
    }

    Ok(TableReport {
        table: table.name,
        files,
        findings,
    })
}
