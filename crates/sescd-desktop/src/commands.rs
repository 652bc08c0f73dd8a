use std::path::Path;

use serde::Serialize;
use sescd_instruments::aggregate::AggregateResult;
use sescd_instruments::error::InstrumentError;
use sescd_instruments::scoring::ScoreEntry;
use sescd_instruments::store::ScoreStore;
use sescd_instruments::{all_instruments, require_instrument, Instrument};

#[derive(Debug, Clone, Serialize)]
pub struct InstrumentSummary {
    pub id: String,
    pub name: String,
    pub total: String,
    pub markdown: String,
}

/// Scoring result for one patient's matrix.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub generated_at: jiff::Timestamp,
    pub aggregate: AggregateResult,
    pub summaries: Vec<InstrumentSummary>,
}

/// Read a JSON array of `{segment, variable, value}` entries.
pub fn read_entries(path: &Path) -> eyre::Result<Vec<ScoreEntry>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read score file {}: {e}", path.display()))?;
    let entries: Vec<ScoreEntry> = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid score file {}: {e}", path.display()))?;
    Ok(entries)
}

/// Validate and load entries into a fresh store.
pub fn score_entries(entries: &[ScoreEntry]) -> eyre::Result<ScoreStore> {
    let mut store = ScoreStore::new();
    match store.apply_entries(entries) {
        Ok(written) => {
            tracing::info!(written, "score entries applied");
            Ok(store)
        }
        Err(InstrumentError::InvalidEntries(errors)) => {
            let details: Vec<String> = errors.iter().map(|e| format!("  - {e}")).collect();
            Err(eyre::eyre!(
                "{} invalid score entries:\n{}",
                errors.len(),
                details.join("\n")
            ))
        }
        Err(e) => Err(e.into()),
    }
}

/// Build a report covering every instrument, or only `only` if given.
pub fn build_report(store: &ScoreStore, only: Option<&str>) -> eyre::Result<ScoreReport> {
    let instruments: Vec<Box<dyn Instrument>> = match only {
        Some(id) => vec![require_instrument(id)?],
        None => all_instruments(),
    };
    let summaries = instruments
        .iter()
        .map(|instrument| InstrumentSummary {
            id: instrument.id().to_string(),
            name: instrument.name().to_string(),
            total: instrument.format_value(instrument.total(store.matrix())),
            markdown: instrument.to_structured_input(store.matrix()),
        })
        .collect();

    Ok(ScoreReport {
        generated_at: jiff::Timestamp::now(),
        aggregate: store.aggregate().clone(),
        summaries,
    })
}

pub fn render_markdown(report: &ScoreReport) -> String {
    let a = &report.aggregate;
    let mut output = String::from("# SES-CD / MM-SES-CD\n\n");
    output.push_str(&format!(
        "- SES-CD: {} ({}, {:.1}%)\n",
        a.ses_cd_total,
        a.severity.label(),
        a.severity_bar_percent
    ));
    output.push_str(&format!(
        "- MM-SES-CD: {} ({})\n",
        a.mm_ses_cd_display(),
        a.remission.label()
    ));
    output.push_str(&format!("- Affected segments: {}\n\n", a.affected_segments));
    for summary in &report.summaries {
        output.push_str(&summary.markdown);
        output.push('\n');
    }
    output
}
