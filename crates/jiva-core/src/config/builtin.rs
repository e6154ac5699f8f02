use super::schema::DatasetConfig;
use crate::faq::FaqTable;
use std::sync::LazyLock;

const DEFAULT_CONFIG_JSON: &str = include_str!("../../../../config/default.json");
const DEFAULT_FAQ_JSON: &str = include_str!("../../../../config/faq.json");

static DEFAULT_CONFIG: LazyLock<DatasetConfig> = LazyLock::new(|| {
    serde_json::from_str(DEFAULT_CONFIG_JSON).expect("embedded default.json is valid")
});

static DEFAULT_FAQ: LazyLock<FaqTable> = LazyLock::new(|| {
    serde_json::from_str(DEFAULT_FAQ_JSON).expect("embedded faq.json is valid")
});

/// The configuration matching the INGRES workbook layout.
pub fn default_config() -> &'static DatasetConfig {
    &DEFAULT_CONFIG
}

/// The built-in INGRES methodology FAQ.
pub fn default_faq() -> &'static FaqTable {
    &DEFAULT_FAQ
}
