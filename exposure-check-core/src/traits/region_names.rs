//! Country code → display name abstraction Trait

use std::collections::HashMap;
use std::sync::LazyLock;

/// Region name resolver Trait
pub trait RegionNameResolver: Send + Sync {
    /// English display name for an ISO 3166-1 alpha-2 code, if known.
    fn display_name(&self, code: &str) -> Option<String>;

    /// Display name, or the raw code when no name is known.
    fn resolve_or_code(&self, code: &str) -> String {
        self.display_name(code).unwrap_or_else(|| code.to_string())
    }
}

/// Embedded ISO 3166-1 alpha-2 table.
const REGION_NAMES: &str = include_str!("../data/regions.json");

static REGION_TABLE: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    serde_json::from_str(REGION_NAMES).unwrap_or_else(|e| {
        log::error!("Failed to parse embedded region table: {e}");
        HashMap::new()
    })
});

/// Resolver backed by the embedded table. Lookups ignore case and surrounding whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRegionNames;

impl RegionNameResolver for StaticRegionNames {
    fn display_name(&self, code: &str) -> Option<String> {
        REGION_TABLE.get(&code.trim().to_uppercase()).cloned()
    }
}
