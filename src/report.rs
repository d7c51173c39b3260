//! Report formatting for finished runs.
//!
//! Pure functions — (RunReport, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{OutputFormat, RunReport};

/// Format a run report for output.
pub fn format_report(report: &RunReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(report),
        OutputFormat::Json => format_json(report),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(report: &RunReport) -> String {
    let mut out = String::new();
    out.push_str("=== Summary ===\n");
    out.push_str(&format!("Frames:       {}\n", report.frames));
    if report.late_frames > 0 {
        out.push_str(&format!("Late frames:  {}\n", report.late_frames));
    }
    out.push_str(&format!("Elapsed:      {:.2}s\n", report.elapsed_secs));
    out.push_str(&format!("Done:         {}\n", report.final_state.is_done()));
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(report: &RunReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_else(|e| {
        // Plain numbers and bools; serialization cannot fail
        panic!("Failed to serialize report to JSON: {}", e)
    })
}

// ============================================================================
// TESTS
// ============================================================================
