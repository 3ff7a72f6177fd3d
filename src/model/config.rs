use indexmap::IndexMap;
use serde::Deserialize;

/// Configuration from config.toml in the data directory. Everything is
/// optional; a missing file means an all-default config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UiConfig {
    /// Hex color overrides for named theme slots (e.g. `selection_bg = "#3a3a5a"`),
    /// applied in file order.
    #[serde(default)]
    pub colors: IndexMap<String, String>,
    /// Hide the key hints in the status row.
    #[serde(default)]
    pub hide_key_hints: bool,
}
