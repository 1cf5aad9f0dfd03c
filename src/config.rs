use crate::error::{CodescoreError, Result};
use crate::types::config::CodescoreConfig;
use std::path::{Path, PathBuf};
use toml::value::Table;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "codescore.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".codescore/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/codescore/config.toml";

#[derive(Debug, Clone)]
pub struct ConfigLayers {
    global: Option<PathBuf>,
    project: PathBuf,
    local: PathBuf,
}

impl ConfigLayers {
    pub fn new(root: &Path, global: Option<PathBuf>) -> Self {
        Self {
            global,
            project: root.join(DEFAULT_CONFIG_FILE),
            local: root.join(DEFAULT_LOCAL_FILE),
        }
    }

    pub fn discover(root: &Path) -> Self {
        let global = std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(DEFAULT_GLOBAL_CONFIG_FILE));
        Self::new(root, global)
    }

    pub fn load(&self) -> Result<Option<CodescoreConfig>> {
        if !self.project.is_file() {
            return Ok(None);
        }

        let mut merged = Table::new();
        for path in self.existing() {
            overlay(&mut merged, read_layer(path)?);
        }

        let cfg: CodescoreConfig = Value::Table(merged)
            .try_into()
            .map_err(|e: toml::de::Error| CodescoreError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(Some(cfg))
    }

    fn existing(&self) -> impl Iterator<Item = &Path> {
        self.global
            .as_deref()
            .into_iter()
            .chain([self.project.as_path(), self.local.as_path()])
            .filter(|path| path.is_file())
    }
}

pub fn load_config(root: &Path) -> Result<Option<CodescoreConfig>> {
    ConfigLayers::discover(root).load()
}

fn read_layer(path: &Path) -> Result<Table> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CodescoreError::ConfigParse(format!("{}: {}", path.display(), e)))
}

// Tables merge key by key; any other value replaces what was there.
fn overlay(base: &mut Table, layer: Table) {
    for (key, value) in layer {
        match (base.get_mut(&key), value) {
            (Some(Value::Table(existing)), Value::Table(nested)) => overlay(existing, nested),
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}
