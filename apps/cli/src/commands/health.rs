//! Health command implementation.

use colored::Colorize;
use pdm_client::OrchestrationClient;
use serde_json::json;

/// Execute the health command.
///
/// Fails with the error message when the API is unreachable or unhealthy.
pub async fn execute(client: &OrchestrationClient, json_output: bool) -> anyhow::Result<()> {
    let health = client.health().await.map_err(|e| anyhow::anyhow!("Health check failed: {}", e))?;

    if json_output {
        let output = json!({ "api_base": client.base_url(), "health": health });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} API reachable at {}", "✓".green(), client.base_url().cyan());
    if let Some(fields) = health.as_object() {
        for (key, value) in fields {
            let value = value.as_str().map_or_else(|| value.to_string(), ToString::to_string);
            println!("  {}: {}", key.dimmed(), value);
        }
    }

    Ok(())
}
