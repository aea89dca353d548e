use colored::*;
use std::time::Duration;

use crate::sse_client::Event;

#[derive(Debug)]
pub struct TestResult {
    pub scenario: String,
    pub passed: bool,
    pub message: Option<String>,
    pub duration: Duration,
}

pub fn print_event(endpoint: &str, event: &Event) {
    let name_colored = if event.event_type == "reverse_echo" {
        event.event_type.bright_magenta()
    } else {
        event.event_type.bright_blue()
    };

    println!(
        "[{}] {} #{}",
        endpoint.bold(),
        name_colored,
        event
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string())
            .yellow()
    );
    println!("   {}", event.data.to_string().dimmed());
}

pub fn print_test_summary(results: &[TestResult]) {
    println!("\n{}", "=== TEST SUMMARY ===".bright_white().bold());

    let total = results.len();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = total - passed;

    for result in results {
        let status = if result.passed {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };

        println!("[{}] {} ({:?})", status, result.scenario, result.duration);

        if let Some(msg) = &result.message {
            println!("      {}", msg.dimmed());
        }
    }

    println!(
        "\n{}: {} passed, {} failed",
        "Results".bold(),
        passed.to_string().green(),
        failed.to_string().red()
    );
}
