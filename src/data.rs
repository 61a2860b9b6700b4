use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fs;

/// Display title of the process-wide data source.
pub const GLOBAL_DATA_TITLE: &str = "Global Data";

/// The process-wide global data source, addressable from every node's mapper.
///
/// Constructed once at session start and passed into the session explicitly;
/// there is no ambient global state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GlobalData {
    #[serde(default = "default_title")]
    pub title: String,
    pub values: AHashMap<String, String>,
}

fn default_title() -> String {
    GLOBAL_DATA_TITLE.to_string()
}

impl GlobalData {
    /// Load global data from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }

    /// Creates default mock data when no backing source is wired up.
    pub fn default() -> Self {
        let mut values = AHashMap::new();
        values.insert("dataA".to_string(), "Data A".to_string());
        values.insert("dataB".to_string(), "Data B".to_string());
        values.insert("dataC".to_string(), "Data C".to_string());

        Self {
            title: default_title(),
            values,
        }
    }

    /// Keys of the global data in display order.
    pub fn option_keys(&self) -> Vec<String> {
        self.values.keys().cloned().sorted().collect()
    }
}
