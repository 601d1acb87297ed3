use crate::pos::DEFAULT_TAX_PERCENT;
use tracing::warn;

pub const TAX_PERCENT_VAR: &str = "STOCKROOM_TAX_PERCENT";
pub const EMPTY_VAR: &str = "STOCKROOM_EMPTY";

/// Startup settings. Logging is configured separately through `RUST_LOG`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tax added on top of the POS subtotal, in percent.
    pub tax_percent: u32,
    /// Start both screens with the demo records.
    pub seed_demo_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tax_percent: DEFAULT_TAX_PERCENT,
            seed_demo_data: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Values that do not parse are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TAX_PERCENT_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(percent) => config.tax_percent = percent,
                Err(e) => warn!(
                    var = TAX_PERCENT_VAR,
                    value = %raw,
                    error = %e,
                    "Ignoring invalid tax rate"
                ),
            }
        }

        if let Some(raw) = lookup(EMPTY_VAR) {
            match raw.trim() {
                "1" | "true" => config.seed_demo_data = false,
                "0" | "false" | "" => {}
                other => warn!(var = EMPTY_VAR, value = %other, "Ignoring invalid flag"),
            }
        }

        config
    }
}
