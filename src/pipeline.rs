//! Sequential read → decode → filter pipeline over every configured source.
//!
//! Each source ends in exactly one [`SourceOutcome`]; a failing source only loses its
//! own contribution and the run always reaches the end of the list.

use std::time::Duration;

use tracing::{info, warn};

use crate::config::Config;
use crate::encoding::{decode_base64, is_base64};
use crate::error::SourceError;
use crate::filter::filter_lines;
use crate::source::read_source;

#[derive(Debug)]
pub enum SourceOutcome {
    /// Read (and decoded if needed); `count` may be zero.
    Parsed { count: usize },
    /// Not a URL or existing file.
    Skipped,
    Failed { reason: SourceError },
}

#[derive(Debug)]
pub struct SourceReport {
    pub reference: String,
    pub outcome: SourceOutcome,
}

#[derive(Debug, Default)]
pub struct RunReport {
    /// Matches in source order, then line order. Duplicates are kept.
    pub lines: Vec<String>,
    pub sources: Vec<SourceReport>,
}

impl RunReport {
    /// Sources that produced at least one match.
    pub fn parsed(&self) -> usize {
        self.count(|o| matches!(o, SourceOutcome::Parsed { count } if *count > 0))
    }

    /// Sources read successfully that had nothing to keep.
    pub fn empty(&self) -> usize {
        self.count(|o| matches!(o, SourceOutcome::Parsed { count: 0 }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, SourceOutcome::Skipped))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, SourceOutcome::Failed { .. }))
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    fn count(&self, pred: impl Fn(&SourceOutcome) -> bool) -> usize {
        self.sources.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Processes `config.sources` one after another and collects every match.
pub async fn run(config: &Config) -> RunReport {
    info!(sources = config.sources.len(), "processing subscription sources");

    let mut report = RunReport {
        lines: Vec::new(),
        sources: Vec::with_capacity(config.sources.len()),
    };

    for reference in &config.sources {
        let outcome = match process_source(reference, config.timeout).await {
            Ok(found) => {
                let count = found.len();
                report.lines.extend(found);
                SourceOutcome::Parsed { count }
            }
            Err(err) if err.is_skip() => SourceOutcome::Skipped,
            Err(err) => SourceOutcome::Failed { reason: err },
        };

        log_outcome(reference, &outcome);
        report.sources.push(SourceReport {
            reference: reference.clone(),
            outcome,
        });
    }

    report
}

async fn process_source(reference: &str, timeout: Option<Duration>) -> Result<Vec<String>, SourceError> {
    let mut content = read_source(reference, timeout).await?;
    if is_base64(&content) {
        content = decode_base64(&content)?;
    }
    Ok(filter_lines(&content))
}

fn log_outcome(reference: &str, outcome: &SourceOutcome) {
    match outcome {
        SourceOutcome::Parsed { count: 0 } => info!(source = reference, "no valid configs found"),
        SourceOutcome::Parsed { count } => info!(source = reference, count, "parsed configs"),
        SourceOutcome::Skipped => warn!(source = reference, "skipping invalid link or file path"),
        SourceOutcome::Failed { reason } => warn!(source = reference, error = %reason, "source failed"),
    }
}
