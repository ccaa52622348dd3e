//! Command implementations.

use std::fs;

use anyhow::Context;
use tracing::info;

use fora_ingest::read_records;
use fora_model::SCHEMA_VERSION;
use fora_output::{SinkConfig, to_line_protocol};
use fora_transform::{BatchOutcome, BuildOptions, build_all};

use crate::cli::{ConvertArgs, ShowArgs};
use crate::summary::{print_failures, print_measurements, print_records};

/// Outcome of `convert`, for the summary and the exit code.
pub struct ConvertResult {
    pub records: usize,
    pub points: usize,
    pub failed_rows: usize,
}

impl ConvertResult {
    pub fn has_errors(&self) -> bool {
        self.failed_rows > 0
    }
}

pub fn run_convert(args: &ConvertArgs) -> anyhow::Result<ConvertResult> {
    let records = read_records(&args.csv)
        .with_context(|| format!("reading {}", args.csv.display()))?;
    info!(
        records = records.len(),
        schema_version = SCHEMA_VERSION,
        "parsed csv export"
    );

    let options = BuildOptions {
        include_empty: args.include_empty,
    };
    let outcome: BatchOutcome = build_all(&records, options);
    print_failures(&outcome.failures);

    let sink = SinkConfig::from_env();
    info!(
        url = %sink.url(),
        org = %sink.org,
        bucket = %sink.bucket,
        "sink target for the rendered line protocol"
    );

    let lines = to_line_protocol(&outcome.measurements);
    match &args.out {
        Some(path) => fs::write(path, &lines)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{lines}"),
    }
    info!(
        points = outcome.measurements.len(),
        failed_rows = outcome.failures.len(),
        "conversion finished"
    );

    Ok(ConvertResult {
        records: records.len(),
        points: outcome.measurements.len(),
        failed_rows: outcome.failures.len(),
    })
}

pub fn run_show(args: &ShowArgs) -> anyhow::Result<()> {
    let mut records = read_records(&args.csv)
        .with_context(|| format!("reading {}", args.csv.display()))?;
    let total = records.len();
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }
    println!(
        "{} of {} record(s) from {} (schema v{SCHEMA_VERSION})",
        records.len(),
        total,
        args.csv.display()
    );
    print_records(&records);

    let options = BuildOptions {
        include_empty: args.include_empty,
    };
    let outcome = build_all(&records, options);
    print_measurements(&outcome.measurements);
    print_failures(&outcome.failures);
    Ok(())
}
