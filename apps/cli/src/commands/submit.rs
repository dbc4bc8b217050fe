//! Submit command implementation.

use anyhow::bail;
use colored::Colorize;
use pdm_client::view::{self, ResultPanel, ResultView};
use pdm_client::{ORCHESTRATE_PATH, OrchestrationClient, RequestEditor, RequestState};
use std::path::Path;

use super::read_document;

/// Execute the submit command.
///
/// Refuses text that is not valid JSON, exactly as the editor's submit guard
/// does. On success prints the result; on failure returns the request error
/// message so the process exits non-zero.
pub async fn execute(client: &OrchestrationClient, file: Option<&Path>, json_output: bool) -> anyhow::Result<()> {
    let editor = RequestEditor::new(read_document(file)?);
    if let Some(error) = editor.parse_error() {
        bail!("Invalid JSON: {}", error);
    }

    if !json_output {
        eprintln!("{} {}", "→".cyan(), format!("POST {}{}", client.base_url(), ORCHESTRATE_PATH).dimmed());
    }

    let state = client.submit(editor.text()).await;
    match view::project(&state) {
        ResultPanel::Result(result_view) => {
            if json_output {
                if let RequestState::Success(result) = state {
                    println!("{}", serde_json::to_string_pretty(&result.into_raw())?);
                }
            } else {
                output_human(&result_view);
            }
            Ok(())
        }
        ResultPanel::Error(message) => bail!(message),
        ResultPanel::Loading | ResultPanel::Placeholder(_) => bail!("Request did not complete"),
    }
}

fn output_human(result: &ResultView) {
    println!("{}", "Risk".bold().cyan());
    println!("  Score: {}", risk_colored(result));
    println!("  Component: {}", result.component);
    println!();

    println!("{}", "Booking".bold().cyan());
    println!("  Center: {}", result.center_id);
    println!("  Starts: {}", result.starts_at);
    if let Some(ends_at) = &result.ends_at {
        println!("  Ends: {}", ends_at);
    }
    println!("  Status: {}", result.status);
    if let Some(booking_id) = &result.booking_id {
        println!("  Booking ID: {}", booking_id.dimmed());
    }
    println!();

    println!("{}", "Root cause".bold().cyan());
    println!("  {}", result.rca_summary);
    if let Some(cases) = &result.similar_cases {
        println!("  Similar cases: {}", cases.dimmed());
    }
    println!();

    println!("{}", "Voice script".bold().cyan());
    println!("  {}", result.voice_script);

    if let Some(alert_id) = &result.alert_id {
        println!();
        println!("  Alert: {}", alert_id.dimmed());
    }
    if result.security_allowed == Some(false) {
        println!("  {}", "Security check did not allow this request".yellow());
    }

    if !result.missing_fields.is_empty() {
        eprintln!();
        eprintln!(
            "{} {}",
            "warning:".yellow().bold(),
            format!("response is missing fields: {}", result.missing_fields.join(", ")).yellow()
        );
    }
}

fn risk_colored(result: &ResultView) -> colored::ColoredString {
    match result.risk_level.as_str() {
        "high" => result.risk_headline.red().bold(),
        "medium" => result.risk_headline.yellow().bold(),
        "low" => result.risk_headline.green().bold(),
        _ => result.risk_headline.normal(),
    }
}
