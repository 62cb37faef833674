//! Rendering session reports for the console.

use duet_core::{Comparison, FunctionStats, SessionReport, Strategy, Verdict};
use std::fmt;
use std::time::Duration;

/// Render the human-readable report: results, profile, memory.
pub fn render_text(report: &SessionReport) -> String {
    TextReport(report).to_string()
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &SessionReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

struct TextReport<'a>(&'a SessionReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        for comparison in &report.comparisons {
            write_comparison(f, comparison)?;
            writeln!(f)?;
        }

        write_profile(f, &report.profile)?;
        writeln!(f)?;

        match report.peak_memory_kib {
            Some(kib) => writeln!(f, "Memory: {}", kib),
            None => writeln!(f, "Memory: unavailable"),
        }
    }
}

fn write_comparison(f: &mut fmt::Formatter<'_>, comparison: &Comparison) -> fmt::Result {
    writeln!(f, "{} ({})", comparison.problem, comparison.input)?;
    for strategy in Strategy::ALL {
        let run = comparison.run(strategy);
        let m = &run.measurement;
        writeln!(
            f,
            "  {} {}: {} call{} in {:.6}s",
            strategy,
            m.function,
            m.calls,
            if m.calls == 1 { "" } else { "s" },
            m.elapsed.as_secs_f64(),
        )?;
        writeln!(f, "    {}", run.outcome)?;
    }
    if comparison.verdict == Verdict::Agreed {
        if let Some(slowdown) = comparison.slowdown() {
            writeln!(f, "  recursive/iterative time: {:.1}x", slowdown)?;
        }
    }
    Ok(())
}

fn write_profile(f: &mut fmt::Formatter<'_>, rows: &[FunctionStats]) -> fmt::Result {
    let calls: u64 = rows.iter().map(|s| s.calls).sum();
    let primitive: u64 = rows.iter().map(|s| s.primitive_calls).sum();
    let seconds: Duration = rows.iter().map(|s| s.total_time).sum();

    if calls == primitive {
        writeln!(f, "{:>9} function calls in {:.3} seconds", calls, seconds.as_secs_f64())?;
    } else {
        writeln!(
            f,
            "{:>9} function calls ({} primitive calls) in {:.3} seconds",
            calls,
            primitive,
            seconds.as_secs_f64()
        )?;
    }
    writeln!(f)?;
    writeln!(f, "   Ordered by: internal time")?;
    writeln!(f)?;
    writeln!(
        f,
        "{:>9} {:>8} {:>8} {:>8} {:>8} {}",
        "ncalls", "tottime", "percall", "cumtime", "percall", "function"
    )?;

    for row in rows {
        writeln!(
            f,
            "{:>9} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {}",
            ncalls(row),
            row.total_time.as_secs_f64(),
            row.total_per_call().as_secs_f64(),
            row.cumulative_time.as_secs_f64(),
            row.cumulative_per_call().as_secs_f64(),
            row.function,
        )?;
    }
    Ok(())
}

/// `ncalls` column: `total/primitive` for recursive functions.
fn ncalls(row: &FunctionStats) -> String {
    if row.calls == row.primitive_calls {
        row.calls.to_string()
    } else {
        format!("{}/{}", row.calls, row.primitive_calls)
    }
}
