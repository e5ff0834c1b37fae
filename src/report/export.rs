//! JSON and CSV export of collected results

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::benchmark::{PhaseResult, WORKERS_PER_PHASE};
use crate::utils::Result;

#[derive(Serialize)]
struct PhaseRecord<'a> {
    variant: usize,
    policy: &'a str,
    elapsed_secs: f64,
    factor: f64,
    per_op_secs: f64,
    final_value: u64,
    total_increments: u64,
    stopped_early: bool,
}

#[derive(Serialize)]
struct ResultsDocument<'a> {
    iterations: u64,
    workers_per_phase: usize,
    phases: Vec<PhaseRecord<'a>>,
}

fn to_records(results: &[PhaseResult]) -> Vec<PhaseRecord<'_>> {
    results
        .iter()
        .enumerate()
        .map(|(variant, r)| PhaseRecord {
            variant,
            policy: r.policy.as_str(),
            elapsed_secs: r.elapsed.as_secs_f64(),
            factor: r.factor,
            per_op_secs: r.per_op.as_secs_f64(),
            final_value: r.final_value,
            total_increments: r.total_increments,
            stopped_early: r.stopped_early,
        })
        .collect()
}

/// Write the full results document as pretty-printed JSON.
pub fn write_json(results: &[PhaseResult], iterations: u64, path: &Path) -> Result<()> {
    let doc = ResultsDocument {
        iterations,
        workers_per_phase: WORKERS_PER_PHASE,
        phases: to_records(results),
    };

    let mut file = File::create(path)?;
    writeln!(file, "{}", serde_json::to_string_pretty(&doc).unwrap())?;
    Ok(())
}

/// Write results as CSV, one row per phase.
pub fn write_csv(results: &[PhaseResult], path: &Path) -> Result<()> {
    let mut file = File::create(path)?;

    writeln!(
        file,
        "variant,policy,elapsed_secs,factor,per_op_secs,final_value,total_increments,stopped_early"
    )?;

    for (variant, r) in results.iter().enumerate() {
        writeln!(
            file,
            "{},{},{:.6},{:.3},{:.10},{},{},{}",
            variant,
            r.policy.as_str(),
            r.elapsed.as_secs_f64(),
            r.factor,
            r.per_op.as_secs_f64(),
            r.final_value,
            r.total_increments,
            r.stopped_early
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::SyncPolicy;
    use std::time::Duration;

    fn sample_results() -> Vec<PhaseResult> {
        SyncPolicy::ALL
            .iter()
            .map(|&policy| PhaseResult {
                policy,
                elapsed: Duration::from_millis(12),
                factor: if policy == SyncPolicy::Unsynchronized {
                    1.0
                } else {
                    2.5
                },
                per_op: Duration::from_nanos(40_000),
                final_value: 300,
                total_increments: 300,
                stopped_early: false,
            })
            .collect()
    }

    #[test]
    fn test_json_document_shape() {
        let path = std::env::temp_dir().join(format!("csb-json-{}.json", std::process::id()));
        write_json(&sample_results(), 100, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(doc["iterations"], 100);
        assert_eq!(doc["workers_per_phase"], 3);
        assert_eq!(doc["phases"].as_array().unwrap().len(), 4);
        assert_eq!(doc["phases"][0]["policy"], "unsynchronized");
        assert_eq!(doc["phases"][0]["factor"], 1.0);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_csv_has_header_and_four_rows() {
        let path = std::env::temp_dir().join(format!("csb-csv-{}.csv", std::process::id()));
        write_csv(&sample_results(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("variant,policy,elapsed_secs"));
        assert!(lines[1].starts_with("0,unsynchronized,"));
        assert!(lines[4].starts_with("3,locked-direct,"));

        std::fs::remove_file(&path).ok();
    }
}
