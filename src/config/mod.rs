use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    core::utils::{app_data_dir, config_file_in, ensure_dir},
    domain::PivotSpec,
    errors::PivotError,
};

const TMP_SUFFIX: &str = "tmp";

/// Stored pivot preferences: the spec a fresh view opens with plus saved presets.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PivotConfig {
    #[serde(default)]
    pub default_spec: PivotSpec,
    #[serde(default)]
    pub presets: BTreeMap<String, PivotSpec>,
}

impl PivotConfig {
    pub fn preset(&self, name: &str) -> Option<&PivotSpec> {
        self.presets.get(name)
    }

    /// Stores `spec` under `name`, returning the spec it replaced.
    pub fn upsert_preset(&mut self, name: impl Into<String>, spec: PivotSpec) -> Option<PivotSpec> {
        self.presets.insert(name.into(), spec)
    }

    pub fn remove_preset(&mut self, name: &str) -> Option<PivotSpec> {
        self.presets.remove(name)
    }

    pub fn preset_names(&self) -> Vec<&str> {
        self.presets.keys().map(String::as_str).collect()
    }
}

/// Reads and writes [`PivotConfig`] as pretty-printed JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Manager rooted at `$RECEIPT_PIVOT_HOME` or `~/.receipt_pivot`.
    pub fn new() -> Result<Self, PivotError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, PivotError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<PivotConfig, PivotError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: PivotConfig = serde_json::from_str(&data)?;
            tracing::info!(
                path = %self.path.display(),
                presets = config.presets.len(),
                "pivot config loaded"
            );
            Ok(config)
        } else {
            Ok(PivotConfig::default())
        }
    }

    pub fn save(&self, config: &PivotConfig) -> Result<(), PivotError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "pivot config saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), PivotError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroupByField, TimeGrain};

    #[test]
    fn tmp_path_appends_suffix() {
        assert_eq!(
            tmp_path(Path::new("/x/config.json")),
            PathBuf::from("/x/config.json.tmp")
        );
        assert_eq!(tmp_path(Path::new("/x/config")), PathBuf::from("/x/config.tmp"));
    }

    #[test]
    fn presets_can_be_replaced_and_removed() {
        let mut config = PivotConfig::default();
        let weekly = PivotSpec {
            time_grain: TimeGrain::Week,
            ..PivotSpec::default()
        };
        assert!(config.upsert_preset("weekly", weekly.clone()).is_none());
        let by_shop = PivotSpec {
            group_by: vec![GroupByField::Shop],
            ..weekly.clone()
        };
        assert_eq!(config.upsert_preset("weekly", by_shop), Some(weekly));
        assert_eq!(config.preset_names(), vec!["weekly"]);
        assert!(config.remove_preset("weekly").is_some());
        assert!(config.preset("weekly").is_none());
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config: PivotConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PivotConfig::default());
    }
}
