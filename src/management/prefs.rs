use std::collections::HashMap;
use std::path::PathBuf;

use crate::utils;

/// Durable string key-value store scoped to a named component.
///
/// Each component is one pretty-printed JSON file under
/// `<data dir>/scroblcli/prefs/`. A missing or unreadable file behaves like
/// an empty store; writes go through [`Preferences::save`].
pub struct Preferences {
    component: String,
    root: PathBuf,
    values: HashMap<String, String>,
}

impl Preferences {
    pub async fn for_component(component: &str) -> Self {
        let root = utils::data_directory(false).join("prefs");
        Self::for_component_in(root, component).await
    }

    /// Same as [`Preferences::for_component`] with an explicit root
    /// directory. Tests use this to keep their files out of the real data
    /// directory.
    pub async fn for_component_in(root: PathBuf, component: &str) -> Self {
        let mut prefs = Preferences {
            component: component.to_string(),
            root,
            values: HashMap::new(),
        };

        if let Ok(json) = async_fs::read_to_string(prefs.path()).await {
            if let Ok(values) = serde_json::from_str(&json) {
                prefs.values = values;
            }
        }

        prefs
    }

    /// Missing keys yield an empty string.
    pub fn get_string(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }

    pub fn set_string(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub async fn save(&self) -> Result<(), String> {
        let path = self.path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.values).map_err(|e| e.to_string())?;
        async_fs::write(path, json).await.map_err(|e| e.to_string())
    }

    fn path(&self) -> PathBuf {
        self.root.join(format!("{}.json", self.component))
    }
}
