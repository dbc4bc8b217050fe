//! CLI configuration loading and client construction.

use anyhow::Context;
use pdm_client::{ClientConfig, OrchestrationClient, PdmConfig};

/// Load and merge the config files.
///
/// Configuration precedence:
/// 1. CLI arguments (handled by clap)
/// 2. Environment variables
/// 3. Local config file (./.pdmrc)
/// 4. Global config file (~/.pdm/config.toml)
/// 5. Defaults
pub fn load_config() -> anyhow::Result<PdmConfig> {
    PdmConfig::discover_and_load().context("Failed to load configuration")
}

/// Resolve the client config from the `--api-base` flag, the environment and the files.
pub fn resolve(api_base: Option<&str>, file_config: &PdmConfig) -> anyhow::Result<ClientConfig> {
    ClientConfig::resolve(api_base, file_config, |key| std::env::var(key).ok())
        .context("Failed to resolve API base URL")
}

pub fn build_client(api_base: Option<&str>, file_config: &PdmConfig) -> anyhow::Result<OrchestrationClient> {
    Ok(OrchestrationClient::new(resolve(api_base, file_config)?))
}
