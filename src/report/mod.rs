//! Human-readable rendering of an experiment report.

use crate::experiment::ExperimentReport;
use crate::summary::SummaryStatistics;
use std::io;

fn group_line(label: &str, stats: &SummaryStatistics) -> String {
    format!(
        "Group {}: {} ones, {} zeros, the total is {}",
        label, stats.successes, stats.failures, stats.total
    )
}

/// Render the report as the fixed sequence of printed lines.
///
/// Line formats are part of the observable interface: group counts, rates as
/// percentages with two decimals, the statistic with two and the p-value with
/// three decimals, the decision line, and the interval in percent.
pub fn render_report(report: &ExperimentReport) -> String {
    let mut lines = Vec::new();

    lines.push(group_line(&report.control_label, &report.control));
    lines.push(group_line(&report.treatment_label, &report.treatment));

    lines.push(format!(
        "Conversion rate for group {}: {:.2}%",
        report.control_label,
        report.control.rate_percent()
    ));
    lines.push(format!(
        "Conversion rate for group {}: {:.2}%",
        report.treatment_label,
        report.treatment.rate_percent()
    ));

    lines.push(format!("T-statistic: {:.2}", report.statistic));
    lines.push(format!("P-value: {:.3}", report.p_value));

    lines.push(
        if report.reject_null {
            "Reject null hypothesis"
        } else {
            "Fail to reject null hypothesis"
        }
        .to_string(),
    );

    lines.push(format!(
        "{}% Confidence Interval: [{:.2}%, {:.2}%]",
        report.interval.level * 100.0,
        report.interval.lower * 100.0,
        report.interval.upper * 100.0
    ));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Write the rendered report to any writer.
pub fn write_report<W: io::Write>(writer: &mut W, report: &ExperimentReport) -> io::Result<()> {
    writer.write_all(render_report(report).as_bytes())
}
