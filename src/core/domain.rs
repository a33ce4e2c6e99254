use std::path::Path;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

pub const PLACEHOLDER_IMAGE: &str = "https://m.media-amazon.com/images/I/71ZB18P3inL._SY522_.jpg";

// Identifiable defines common traits that can be shared by catalog records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> String;
}


// Configuration abstracts config options for a bookshelf session
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Configuration {
    pub session_id: String,
    pub categories: Vec<String>,
    pub placeholder_image: String,
    pub all_label: String,
    pub listen_addr: String,
}

impl Configuration {
    pub fn new(session_id: &str) -> Self {
        Configuration {
            session_id: session_id.to_string(),
            categories: ["Fiction", "Non-Fiction", "Science", "History", "Biography", "Technology"]
                .iter().map(|c| c.to_string()).collect(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            all_label: "All".to_string(),
            listen_addr: "127.0.0.1:3000".to_string(),
        }
    }

    pub fn from_json(json: &str) -> LibraryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    // Fields missing from the file keep their defaults.
    pub fn load(path: &Path) -> LibraryResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(json.as_str())
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Configuration::new("default")
    }
}
