// --- File: crates/booking_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

// --- Form Validation Config ---
/// Switches for the payment form rules.
///
/// `enforce_luhn = false` lets demo card numbers that fail the checksum through;
/// the required, digits-only and 13..=19 length rules still apply.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    #[serde(default = "default_enforce_luhn")]
    pub enforce_luhn: bool,
}

fn default_enforce_luhn() -> bool {
    true
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enforce_luhn: default_enforce_luhn(),
        }
    }
}

impl ValidationConfig {
    /// Checksum enforced (production behavior).
    pub fn strict() -> Self {
        Self { enforce_luhn: true }
    }

    /// Checksum bypassed, for development and demos.
    pub fn skip_luhn_check() -> Self {
        Self {
            enforce_luhn: false,
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}
