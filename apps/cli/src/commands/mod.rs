//! Command implementations for the PDM CLI.

pub mod example;
pub mod health;
pub mod show_config;
pub mod submit;
pub mod validate;

use anyhow::Context;
use std::io::Read;
use std::path::Path;

/// Read a request document: the file, stdin for `-`, or the example when omitted.
pub fn read_document(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        None => Ok(pdm_client::example_document()),
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).context("Failed to read request from stdin")?;
            Ok(text)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display())),
    }
}
