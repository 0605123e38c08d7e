//! Admin Config

use clap::Args;

/// Administrative API settings.
#[derive(Debug, Args)]
pub struct AdminConfig {
    /// Bearer token for `/admin` routes. Admin routes reject every request
    /// when unset.
    #[arg(long = "admin-token", env = "ADMIN_TOKEN", hide_env_values = true)]
    pub token: Option<String>,
}
