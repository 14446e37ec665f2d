use std::collections::BTreeMap;
use std::path;

use crate::RawValue;
use crate::Result;
use crate::Status;

/// Names searched for the base settings, in order of preference.
pub const SITE_FILE_NAMES: [&str; 4] = ["_site.yml", "_site.yaml", "_site.json", "_site.toml"];

/// Names searched, next to the base settings, for the publish overrides.
pub const PUBLISH_FILE_NAMES: [&str; 4] = [
    "_publish.yml",
    "_publish.yaml",
    "_publish.json",
    "_publish.toml",
];

/// Settings exactly as written in a file: any name, untyped values.
///
/// Nothing has been checked yet; the loader decides which names are recognized and whether
/// each value fits its setting.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct RawSettings(BTreeMap<String, RawValue>);

impl RawSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.0.get(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<Self> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<Self> {
        let format = SettingsFormat::from_path(&path).ok_or_else(|| {
            Status::new("Unsupported settings file type, expected yml, yaml, json or toml")
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read settings")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        log::debug!("Reading settings from `{}`", path.display());
        Self::from_str_as(&content, format).map_err(|e| {
            e.context_with(|c| c.insert("Path", path.display().to_string()))
        })
    }

    /// Parse `content` written in `format`.  Blank content is an empty mapping.
    pub fn from_str_as(content: &str, format: SettingsFormat) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings = match format {
            SettingsFormat::Yaml => serde_yaml::from_str(content)
                .map_err(|e| Status::new("Failed to parse settings").with_source(e))?,
            SettingsFormat::Json => serde_json::from_str(content)
                .map_err(|e| Status::new("Failed to parse settings").with_source(e))?,
            SettingsFormat::Toml => toml::from_str(content)
                .map_err(|e| Status::new("Failed to parse settings").with_source(e))?,
        };
        Ok(settings)
    }
}

impl<K: Into<String>, V: Into<RawValue>> FromIterator<(K, V)> for RawSettings {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsFormat {
    Yaml,
    Json,
    Toml,
}

impl SettingsFormat {
    pub fn from_path(path: &path::Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "yml" | "yaml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Find the base settings in `dir` or the nearest parent that has one.
pub fn find_site_file<P: Into<path::PathBuf>>(dir: P) -> Option<path::PathBuf> {
    find_project_file(dir.into(), &SITE_FILE_NAMES)
}

/// Find the publish overrides sitting next to `site_file`.
pub fn find_publish_file(site_file: &path::Path) -> Option<path::PathBuf> {
    let dir = site_file.parent().unwrap_or_else(|| path::Path::new(""));
    PUBLISH_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

fn find_project_file(dir: path::PathBuf, names: &[&str]) -> Option<path::PathBuf> {
    let mut dir = dir;
    loop {
        if let Some(found) = names.iter().map(|name| dir.join(name)).find(|p| p.is_file()) {
            return Some(found);
        }
        let hit_bottom = !dir.pop();
        if hit_bottom {
            return None;
        }
    }
}
