use siteconf_config::ConfigError;
use siteconf_config::ConfigWarning;
use siteconf_config::ConfigurationSet;
use siteconf_config::RawSettings;
use siteconf_config::SettingKey;
use siteconf_config::SettingValue;
use siteconf_config::ValidationIssue;

use crate::validate::validate;

/// What to do with setting names outside of the recognized schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverridePolicy {
    /// Unknown names are fatal, so typos can't be silently ignored
    #[default]
    Strict,
    /// Unknown names are dropped with a warning
    Lenient,
}

/// A configuration ready for the generator, plus what the generator will put up with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub settings: ConfigurationSet,
    pub warnings: Vec<ConfigWarning>,
}

/// Assembles the [`ConfigurationSet`] for one generator run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsLoader {
    policy: OverridePolicy,
}

impl SettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: OverridePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverridePolicy {
        self.policy
    }

    /// Turn the site-wide settings into a checked [`ConfigurationSet`].
    ///
    /// Fails on the first unrecognized name, malformed value or missing required key.
    pub fn load_base(&self, raw: &RawSettings) -> Result<ConfigurationSet, ConfigError> {
        let (entries, issues) = self.recognize(raw, unknown_key);
        let settings = ConfigurationSet::from_entries(entries);
        let warnings = siteconf_config::into_warnings(issues.into_iter().chain(validate(&settings)))?;
        for warning in &warnings {
            log::debug!("Base settings: {warning}");
        }
        Ok(settings)
    }

    /// Apply `overrides` on top of `base` for a publishing run.
    ///
    /// `base` is left untouched; keys missing from `overrides` are inherited as-is.
    /// Inconsistencies the generator tolerates come back as warnings.
    pub fn derive_for_publish(
        &self,
        base: &ConfigurationSet,
        overrides: &RawSettings,
    ) -> Result<Resolved, ConfigError> {
        let (entries, issues) = self.recognize(overrides, unknown_override_key);
        let settings = base.with_overrides(entries);
        let warnings = siteconf_config::into_warnings(issues.into_iter().chain(validate(&settings)))?;
        Ok(Resolved { settings, warnings })
    }

    /// [`SettingsLoader::load_base`] followed by [`SettingsLoader::derive_for_publish`].
    ///
    /// Warnings about the base settings that re-checking the derived set can't see, such as
    /// names dropped under a lenient policy, are kept ahead of the publish warnings.
    pub fn resolve(
        &self,
        base: &RawSettings,
        overrides: &RawSettings,
    ) -> Result<Resolved, ConfigError> {
        let (entries, issues) = self.recognize(base, unknown_key);
        let mut warnings = siteconf_config::into_warnings(issues)?;
        let base = ConfigurationSet::from_entries(entries);
        siteconf_config::into_warnings(validate(&base))?;

        let mut resolved = self.derive_for_publish(&base, overrides)?;
        warnings.append(&mut resolved.warnings);
        resolved.warnings = warnings;
        Ok(resolved)
    }

    /// Run every structural check, leaving it to the caller which issues are fatal.
    pub fn validate(&self, config: &ConfigurationSet) -> Vec<ValidationIssue> {
        validate(config)
    }

    /// Collect every issue for `base` (and `overrides`, when publishing) without stopping at
    /// the first.
    pub fn inspect(
        &self,
        base: &RawSettings,
        overrides: Option<&RawSettings>,
    ) -> Vec<ValidationIssue> {
        let (entries, mut issues) = self.recognize(base, unknown_key);
        let mut settings = ConfigurationSet::from_entries(entries);
        if let Some(overrides) = overrides {
            let (entries, override_issues) = self.recognize(overrides, unknown_override_key);
            issues.extend(override_issues);
            settings = settings.with_overrides(entries);
        }
        issues.extend(validate(&settings));
        issues
    }

    /// Split `raw` into recognized entries and issues for the names that aren't.
    fn recognize(
        &self,
        raw: &RawSettings,
        unknown: fn(&str) -> ConfigError,
    ) -> (Vec<(SettingKey, SettingValue)>, Vec<ValidationIssue>) {
        let mut entries = Vec::with_capacity(raw.len());
        let mut issues = Vec::new();
        for (name, value) in raw.iter() {
            match SettingKey::from_name(name) {
                Some(key) => match siteconf_config::check_raw_value(key, value) {
                    Ok(value) => entries.push((key, value)),
                    Err(error) => issues.push(error.into()),
                },
                None => match self.policy {
                    OverridePolicy::Strict => issues.push(unknown(name).into()),
                    OverridePolicy::Lenient => {
                        log::warn!("Ignoring unrecognized setting `{name}`");
                        issues.push(
                            ConfigWarning::new(name, "unrecognized setting was ignored").into(),
                        );
                    }
                },
            }
        }
        (entries, issues)
    }
}

fn unknown_key(name: &str) -> ConfigError {
    ConfigError::UnknownKey {
        key: name.to_owned(),
    }
}

fn unknown_override_key(name: &str) -> ConfigError {
    ConfigError::UnknownOverrideKey {
        key: name.to_owned(),
    }
}
