use volley::args::OutputFormat;
use volley::error::AppResult;
use volley::run::{FinalReport, RunConfig};

const RULE_WIDTH: usize = 30;

pub(crate) fn print_banner(config: &RunConfig) {
    for line in banner_lines(config) {
        println!("{}", line);
    }
}

/// # Errors
///
/// Returns an error when the JSON report cannot be serialized.
pub(crate) fn print_report(report: &FinalReport, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Text => {
            for line in summary_lines(report) {
                println!("{}", line);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

fn banner_lines(config: &RunConfig) -> Vec<String> {
    vec![
        format!("Starting load test on {}", config.target_url()),
        format!("Concurrency: {} workers", config.concurrency().get()),
        format!("Total Requests: {}", config.total_requests().get()),
        format!("Request Timeout: {}s", config.timeout().get()),
        "-".repeat(RULE_WIDTH),
    ]
}

pub(super) fn summary_lines(report: &FinalReport) -> Vec<String> {
    let mut lines = vec![
        "-".repeat(RULE_WIDTH),
        "Load Test Results:".to_owned(),
        format!("Total Requests Sent: {}", report.total_requests),
        format!("Total Requests Completed: {}", report.total_completed),
        format!("Successful Requests: {}", report.successful),
        format!("Failed Requests: {}", report.failed),
        report.success_rate.map_or_else(
            || "Success Rate: N/A".to_owned(),
            |rate| format!("Success Rate: {:.2}%", rate),
        ),
        format!("Total Test Duration: {:.2} seconds", report.total_duration_secs),
        report.rps.map_or_else(
            || "Requests Per Second (RPS): N/A (duration too short)".to_owned(),
            |rps| format!("Requests Per Second (RPS): {:.2}", rps),
        ),
    ];

    match report.latency {
        Some(latency) => {
            lines.push(format!("Average Response Time: {:.2} ms", latency.avg_ms));
            lines.push(format!("Min Response Time: {:.2} ms", latency.min_ms));
            lines.push(format!("Max Response Time: {:.2} ms", latency.max_ms));
        }
        None => lines.push("No response time data available.".to_owned()),
    }

    if let Some(percentiles) = report.percentiles {
        lines.push(format!(
            "P50/P90/P99 Response Time: {:.2} ms / {:.2} ms / {:.2} ms",
            percentiles.p50_ms, percentiles.p90_ms, percentiles.p99_ms
        ));
    }

    lines.push(String::new());
    if report.error_counts.is_empty() {
        lines.push("No errors recorded.".to_owned());
    } else {
        lines.push("Error Breakdown:".to_owned());
        for (category, count) in &report.error_counts {
            lines.push(format!("- {}: {}", category, count));
        }
    }

    lines
}
