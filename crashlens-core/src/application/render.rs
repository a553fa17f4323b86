// crashlens-core/src/application/render.rs

use crate::application::report::QualityReport;
use crate::domain::audit::checks::ValidationChecks;

/// Renders the full report as one deterministic text document. Pure: the
/// caller decides where the text goes (console, file), so a failed write can
/// never leave a half-rendered artifact.
pub fn render_report(report: &QualityReport) -> String {
    let heavy = "=".repeat(60);
    let light = "-".repeat(60);
    let mut lines: Vec<String> = Vec::new();

    // --- HEADER ---
    lines.push(heavy.clone());
    lines.push("NYC COLLISIONS DATA QUALITY REPORT".to_string());
    lines.push(heavy.clone());
    lines.push(String::new());
    lines.push(format!(
        "Total Records: {}",
        group_thousands(report.total_rows as i64)
    ));
    lines.push(format!("Total Columns: {}", report.columns.len()));
    lines.push(String::new());

    // --- COLUMN METRICS ---
    lines.push(light.clone());
    lines.push("COLUMN-LEVEL METRICS".to_string());
    lines.push(light.clone());
    for col in &report.columns {
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            col.status(&report.thresholds).label(),
            col.name
        ));
        lines.push(format!(
            "   Completeness: {}% ({} non-null, {} null)",
            format_pct2(col.pct),
            group_thousands(col.non_null as i64),
            group_thousands(col.nulls as i64)
        ));
    }
    lines.push(String::new());

    // --- VALIDATION CHECKS ---
    lines.push(light.clone());
    lines.push("DATA VALIDATION CHECKS".to_string());
    lines.push(light.clone());
    lines.push(String::new());
    let checks = &report.checks;
    lines.push(format!(
        "{} Crash DateTime NULL Check: {} NULL values (Expected: 0)",
        pass_label(checks.null_datetime_ok()),
        checks.null_crash_datetime
    ));
    lines.push(format!("[OK] Date Range: {}", format_date_range(checks)));
    lines.push(format!(
        "{} Negative Injury Counts: {} (Expected: 0)",
        pass_label(checks.negative_injuries_ok()),
        checks.negative_injuries
    ));
    lines.push(format!(
        "[OK] Geographic Data: {}% complete ({} records with lat/long)",
        format_pct2(checks.geo.pct),
        group_thousands(checks.geo.count as i64)
    ));
    lines.push(String::new());

    // --- SUMMARY STATISTICS ---
    lines.push(light.clone());
    lines.push("SUMMARY STATISTICS".to_string());
    lines.push(light.clone());
    lines.push(String::new());
    lines.push(format!(
        "Total Injuries: {}",
        group_thousands(report.stats.total_injuries)
    ));
    lines.push(format!(
        "Total Fatalities: {}",
        group_thousands(report.stats.total_fatalities)
    ));
    lines.push(format!(
        "Average Injuries per Crash: {:.2}",
        report.stats.avg_injuries.unwrap_or(0.0)
    ));
    lines.push(format!("Unique Boroughs: {}", report.stats.unique_boroughs));
    lines.push(String::new());

    // --- SCORE FOOTER ---
    lines.push(light);
    lines.push(format!(
        "OVERALL DATA QUALITY SCORE: {:.1}%",
        report.score.score
    ));
    lines.push(format!(
        "({}/{} columns with >={}% completeness)",
        report.score.high_quality_columns, report.score.total_columns, report.thresholds.ok
    ));
    lines.push(heavy);

    lines.join("\n")
}

fn pass_label(ok: bool) -> &'static str {
    if ok { "[OK]" } else { "[FAIL]" }
}

fn format_date_range(checks: &ValidationChecks) -> String {
    match (&checks.date_min, &checks.date_max) {
        (Some(min), Some(max)) => format!("{min} to {max}"),
        _ => "no rows (table is empty)".to_string(),
    }
}

/// Thousands separators, matching the reference layout ("1,234").
fn group_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative { format!("-{out}") } else { out }
}

/// Two-decimal percentage with the trailing zero trimmed: 100.00 renders as
/// "100.0" and 66.67 stays "66.67", matching the reference layout.
fn format_pct2(pct: f64) -> String {
    let mut s = format!("{pct:.2}");
    if s.ends_with('0') {
        s.pop();
    }
    s
}
