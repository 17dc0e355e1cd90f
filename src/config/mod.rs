use crate::storage::DEFAULT_NOTES_KEY;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EnvConfig {
    /// Local storage key holding the notes array.
    pub storage_key: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::from_window().unwrap_or_default()
    }

    // We accept both `window.ENV.STORAGE_KEY` and `window.ENV.storage_key`.
    #[cfg(target_arch = "wasm32")]
    fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let env = window.get("ENV")?;
        if env.is_undefined() || !env.is_object() {
            return None;
        }

        ["STORAGE_KEY", "storage_key"].iter().find_map(|name| {
            js_sys::Reflect::get(&env, &(*name).into())
                .ok()
                .and_then(|v| v.as_string())
                .and_then(Self::from_storage_key)
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_window() -> Option<Self> {
        None
    }

    fn from_storage_key(key: String) -> Option<Self> {
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self {
            storage_key: key.to_string(),
        })
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_NOTES_KEY.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_storage_key() {
        assert_eq!(EnvConfig::default().storage_key, "simple_notes");
        assert_eq!(EnvConfig::new(), EnvConfig::default());
    }

    #[test]
    fn test_blank_storage_key_is_rejected() {
        assert!(EnvConfig::from_storage_key("   ".to_string()).is_none());
        assert_eq!(
            EnvConfig::from_storage_key(" notes_v2 ".to_string()).map(|c| c.storage_key),
            Some("notes_v2".to_string())
        );
    }
}
