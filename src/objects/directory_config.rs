use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DirectoryConfig {
    pub api_base: String,
    /// Search fires once the input is strictly longer than this.
    pub search_min_length: usize,
    pub stream_scheme: String,
    pub link_target: String,
    pub copy_confirmation: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            search_min_length: 2,
            stream_scheme: "vlc://".into(),
            link_target: "_blank".into(),
            copy_confirmation: "Stream URL copied to clipboard!".into(),
        }
    }
}

impl DirectoryConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
