//! Request validation command.
//!
//! Applies the same guard the editor applies before a submission: the text
//! must parse as JSON. Schema issues are reported but never fail the check.

use colored::Colorize;
use pdm_client::RequestEditor;
use serde_json::json;
use std::path::Path;

use super::read_document;

/// Execute the validate command.
///
/// Exits with status 1 when the document is not valid JSON.
pub fn execute(file: Option<&Path>, json_output: bool) -> anyhow::Result<()> {
    let editor = RequestEditor::new(read_document(file)?);
    let issues: Vec<String> = editor.issues().iter().map(ToString::to_string).collect();

    if json_output {
        let output = json!({
            "valid": editor.is_valid(),
            "error": editor.parse_error(),
            "issues": issues,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        output_human(&editor, &issues);
    }

    if !editor.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

fn output_human(editor: &RequestEditor, issues: &[String]) {
    if let Some(error) = editor.parse_error() {
        println!("{} {}", "✗".red(), format!("Invalid JSON: {}", error).red());
        return;
    }

    println!("{} {}", "✓".green(), "Valid JSON".green());
    if issues.is_empty() {
        return;
    }

    println!();
    println!("{}", "Schema warnings:".bold().yellow());
    for issue in issues {
        println!("  • {}", issue.yellow());
    }
}
