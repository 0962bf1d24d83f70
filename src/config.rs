use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub webpay: GatewayCredentials,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

/// Merchant credentials for the WebPay gateway.
///
/// Supplied once at configuration time and read-only afterwards. The
/// host platform owns the storage; this crate only consumes the values.
#[derive(Debug, Clone)]
pub struct GatewayCredentials {
    pub product_id: String,
    pub pay_item_id: String,
    pub mac_key: MacKey,
    /// Single supported currency (NGN)
    pub currency_code: String,
    pub mode: Mode,
}

/// Gateway environment selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Test,
    Live,
}

impl FromStr for Mode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "test" => Ok(Mode::Test),
            "live" => Ok(Mode::Live),
            other => Err(anyhow!("WEBPAY_MODE must be 'test' or 'live', got {}", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Test => write!(f, "test"),
            Mode::Live => write!(f, "live"),
        }
    }
}

/// The shared MAC secret used for request signing.
///
/// Wrapped so the key can never leak through `Debug`/`Display` output
/// or structured logs; signing code gets at the value via [`reveal`].
///
/// [`reveal`]: MacKey::reveal
#[derive(Clone)]
pub struct MacKey(String);

impl MacKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The raw key, for hash input only.
    pub fn reveal(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MacKey(*** redacted ***)")
    }
}

impl fmt::Display for MacKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("*** redacted ***")
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let server = ServerConfig {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        };

        let webpay = GatewayCredentials {
            product_id: env::var("WEBPAY_PRODUCT_ID").context("WEBPAY_PRODUCT_ID not set")?,
            pay_item_id: env::var("WEBPAY_PAY_ITEM_ID").context("WEBPAY_PAY_ITEM_ID not set")?,
            mac_key: MacKey::new(env::var("WEBPAY_MAC_KEY").context("WEBPAY_MAC_KEY not set")?),
            currency_code: env::var("WEBPAY_CURRENCY_CODE").unwrap_or_else(|_| "NGN".to_string()),
            mode: env::var("WEBPAY_MODE")
                .unwrap_or_else(|_| "test".to_string())
                .parse()?,
        };

        let config = Config { server, webpay };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.port < 1024 {
            return Err(anyhow!(
                "Port must be at least 1024, got {}",
                self.server.port
            ));
        }

        let valid_environments = ["development", "staging", "production"];
        if !valid_environments.contains(&self.server.environment.as_str()) {
            return Err(anyhow!(
                "Environment must be one of: {:?}, got {}",
                valid_environments,
                self.server.environment
            ));
        }

        if self.webpay.product_id.trim().is_empty() {
            return Err(anyhow!("WEBPAY_PRODUCT_ID cannot be empty"));
        }

        if self.webpay.pay_item_id.trim().is_empty() {
            return Err(anyhow!("WEBPAY_PAY_ITEM_ID cannot be empty"));
        }

        if self.webpay.mac_key.is_empty() {
            return Err(anyhow!("WEBPAY_MAC_KEY cannot be empty"));
        }

        // WebPay supports a single currency.
        if self.webpay.currency_code != "NGN" {
            return Err(anyhow!(
                "WEBPAY_CURRENCY_CODE must be NGN, got {}",
                self.webpay.currency_code
            ));
        }

        Ok(())
    }
}
