//! Config command implementation.

use colored::Colorize;
use pdm_client::{ClientConfig, PdmConfig};
use serde_json::json;
use std::path::Path;
use tracing::Level;

/// Print the effective configuration and where it was read from.
pub fn execute(
    resolved: &ClientConfig,
    file_config: &PdmConfig,
    log_level: Level,
    json_output: bool,
) -> anyhow::Result<()> {
    let global = PdmConfig::default_global_path();
    let output_format = file_config.output.format.as_deref().unwrap_or("human");
    let local = PdmConfig::default_local_path();

    if json_output {
        let output = json!({
            "api_base": resolved.api_base,
            "strict_schema": resolved.strict_schema,
            "log_level": log_level.to_string().to_lowercase(),
            "output_format": output_format,
            "files": {
                "global": { "path": global.display().to_string(), "exists": global.exists() },
                "local": { "path": local.display().to_string(), "exists": local.exists() },
            },
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "PDM Configuration".bold().cyan());
    println!();
    println!("  API base: {}", resolved.api_base.green());
    println!("  Strict schema: {}", resolved.strict_schema);
    println!("  Log level: {}", log_level.to_string().to_lowercase());
    println!("  Output format: {}", output_format);
    println!();
    println!("{}", "Files:".bold());
    print_file("Global", &global);
    print_file("Local", &local);

    Ok(())
}

fn print_file(label: &str, path: &Path) {
    let marker = if path.exists() { "✓".green() } else { "not found".dimmed() };
    println!("  {}: {} ({})", label, path.display(), marker);
}
