// src/presentation.rs
use std::io::Write;
use verscan_engine::ScanOutcome;

/// Print one line per record with a 1-based counter.
///
/// Records are sorted by relative path before printing so output is
/// stable for a fixed tree, independent of parallel completion order.
pub fn print_results(outcome: &ScanOutcome, out: &mut impl Write) -> std::io::Result<()> {
    let mut records: Vec<_> = outcome.records.iter().collect();
    records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

    for (i, record) in records.iter().enumerate() {
        writeln!(out, "{:<8} {}", i + 1, record.format_line())?;
    }
    Ok(())
}
