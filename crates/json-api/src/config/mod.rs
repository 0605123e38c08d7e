//! Server configuration module

use clap::Parser;

use crate::config::{
    admin::AdminConfig,
    catalog::CatalogConfig,
    checkout::ChargesConfig,
    observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod admin;
pub(crate) mod catalog;
pub(crate) mod checkout;
pub(crate) mod observability;
pub(crate) mod server;

/// Storefront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "storefront-json", about = "Storefront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Tax and shipping applied at checkout.
    #[command(flatten)]
    pub charges: ChargesConfig,

    /// Administrative API settings.
    #[command(flatten)]
    pub admin: AdminConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_without_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from(["storefront-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:3000");
        assert_eq!(config.charges.shipping_fee, Decimal::ZERO);
        assert!(config.admin.token.is_none());

        Ok(())
    }

    #[test]
    fn charges_are_parsed_from_arguments() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "storefront-json",
            "--tax-rate",
            "18%",
            "--shipping-fee",
            "100",
            "--free-shipping-threshold",
            "2500",
        ])?;

        let charges = config.charges.policy();
        let totals = charges.totals_for(Decimal::new(1000, 0), Decimal::ZERO);

        assert_eq!(totals.tax(), Decimal::new(180, 0));
        assert_eq!(totals.shipping(), Decimal::new(100, 0));
        assert_eq!(charges.free_shipping_threshold, Some(Decimal::new(2500, 0)));

        Ok(())
    }

    #[test]
    fn invalid_tax_rate_is_rejected() {
        let result = ServerConfig::try_parse_from(["storefront-json", "--tax-rate", "lots"]);

        assert!(result.is_err(), "non-numeric tax rate should fail to parse");
    }
}
