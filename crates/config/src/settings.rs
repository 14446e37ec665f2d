use std::collections::BTreeMap;
use std::fmt;

use crate::SettingKey;
use crate::SettingValue;

/// The fully-resolved settings handed to the external generator for one run.
///
/// There is no way to change a set in place: deriving a publishing variant produces a new
/// set (see [`ConfigurationSet::with_overrides`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct ConfigurationSet {
    entries: BTreeMap<SettingKey, SettingValue>,
}

impl ConfigurationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `entries` without checking them.  Later duplicates win.
    pub fn from_entries(entries: impl IntoIterator<Item = (SettingKey, SettingValue)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// A new set equal to `self` with every key in `overrides` replaced.
    pub fn with_overrides(
        &self,
        overrides: impl IntoIterator<Item = (SettingKey, SettingValue)>,
    ) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(overrides);
        Self { entries }
    }

    pub fn get(&self, key: SettingKey) -> Option<&SettingValue> {
        self.entries.get(&key)
    }

    pub fn contains(&self, key: SettingKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = SettingKey> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SettingKey, &SettingValue)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn text(&self, key: SettingKey) -> Option<&str> {
        self.get(key).and_then(SettingValue::as_str)
    }

    pub fn flag(&self, key: SettingKey) -> Option<bool> {
        self.get(key).and_then(SettingValue::as_bool)
    }

    pub fn site_url(&self) -> Option<&str> {
        self.text(SettingKey::SiteUrl)
    }

    pub fn relative_urls(&self) -> Option<bool> {
        self.flag(SettingKey::RelativeUrls)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.text(SettingKey::OutputPath)
    }

    pub fn delete_output_directory(&self) -> bool {
        self.flag(SettingKey::DeleteOutputDirectory).unwrap_or(false)
    }

    pub fn social_links(&self) -> &[(String, String)] {
        self.get(SettingKey::SocialLinks)
            .and_then(SettingValue::as_pairs)
            .unwrap_or_default()
    }

    /// The settings keyed by the names the external generator reads.
    pub fn to_generator_map(&self) -> BTreeMap<&'static str, &SettingValue> {
        self.entries
            .iter()
            .map(|(k, v)| (k.generator_name(), v))
            .collect()
    }
}

impl FromIterator<(SettingKey, SettingValue)> for ConfigurationSet {
    fn from_iter<I: IntoIterator<Item = (SettingKey, SettingValue)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl<'s> IntoIterator for &'s ConfigurationSet {
    type Item = (&'s SettingKey, &'s SettingValue);
    type IntoIter = std::collections::btree_map::Iter<'s, SettingKey, SettingValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for ConfigurationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        let converted = converted
            .strip_prefix("---")
            .unwrap_or(converted.as_str())
            .trim();
        write!(f, "{converted}")
    }
}
