use std::fmt;
use std::path;

use siteconf_config::ConfigError;
use siteconf_config::RawSettings;
use siteconf_config::ValidationIssue;

use crate::loader::Resolved;
use crate::loader::SettingsLoader;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    File(#[from] siteconf_config::Status),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Which run the settings are being assembled for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Context {
    /// Local preview, base settings only
    #[default]
    Preview,
    /// Publishing, base settings with the publish overrides applied
    Publish,
}

impl Context {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Publish => "publish",
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

/// The settings files of one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    site_file: path::PathBuf,
    publish_file: Option<path::PathBuf>,
}

impl Project {
    /// Use `site_file` for the base settings and look for publish overrides next to it.
    pub fn from_file<P: Into<path::PathBuf>>(site_file: P) -> Self {
        let site_file = site_file.into();
        let publish_file = siteconf_config::find_publish_file(&site_file);
        Self {
            site_file,
            publish_file,
        }
    }

    /// Find the site settings in `cwd` or one of its parents.
    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<Self> {
        let cwd = cwd.into();
        let site_file = siteconf_config::find_site_file(&cwd).ok_or_else(|| {
            siteconf_config::Status::new("No site settings found").context_with(|c| {
                c.insert("Names", siteconf_config::SITE_FILE_NAMES.join(", "))
                    .insert("Cwd", cwd.display().to_string())
            })
        })?;
        log::debug!("Using site settings `{}`", site_file.display());
        Ok(Self::from_file(site_file))
    }

    /// Use `publish_file` instead of the one found next to the site settings.
    pub fn with_publish_file<P: Into<path::PathBuf>>(mut self, publish_file: P) -> Self {
        self.publish_file = Some(publish_file.into());
        self
    }

    pub fn site_file(&self) -> &path::Path {
        &self.site_file
    }

    pub fn publish_file(&self) -> Option<&path::Path> {
        self.publish_file.as_deref()
    }

    /// Read and check the settings for `context`.
    ///
    /// Publishing without a publish file just uses the base settings.
    pub fn resolve(&self, loader: &SettingsLoader, context: Context) -> Result<Resolved> {
        let base = RawSettings::from_file(&self.site_file)?;
        let overrides = match context {
            Context::Preview => RawSettings::new(),
            Context::Publish => self.read_overrides()?.unwrap_or_default(),
        };
        let resolved = loader.resolve(&base, &overrides)?;
        for warning in &resolved.warnings {
            log::warn!("{warning}");
        }
        Ok(resolved)
    }

    /// Every issue with the settings for `context`, fatal or not.
    pub fn inspect(
        &self,
        loader: &SettingsLoader,
        context: Context,
    ) -> Result<Vec<ValidationIssue>> {
        let base = RawSettings::from_file(&self.site_file)?;
        let overrides = match context {
            Context::Preview => None,
            Context::Publish => self.read_overrides()?,
        };
        Ok(loader.inspect(&base, overrides.as_ref()))
    }

    fn read_overrides(&self) -> Result<Option<RawSettings>> {
        match self.publish_file.as_deref() {
            Some(path) => Ok(Some(RawSettings::from_file(path)?)),
            None => {
                log::debug!(
                    "No publish settings next to `{}`, publishing with the base settings",
                    self.site_file.display()
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use siteconf_config::SettingKey;

    use crate::loader::OverridePolicy;

    #[test]
    fn from_cwd_finds_site_and_publish() {
        let actual = Project::from_cwd("tests/fixtures/blog/content").unwrap();
        assert_eq!(
            actual.site_file(),
            path::Path::new("tests/fixtures/blog/_site.yml")
        );
        assert_eq!(
            actual.publish_file(),
            Some(path::Path::new("tests/fixtures/blog/_publish.yml"))
        );
    }

    #[test]
    fn from_cwd_missing() {
        assert!(Project::from_cwd("tests/fixtures").is_err());
    }

    #[test]
    fn resolve_preview() {
        let project = Project::from_file("tests/fixtures/blog/_site.yml");
        let actual = project
            .resolve(&SettingsLoader::new(), Context::Preview)
            .unwrap();
        assert_eq!(actual.settings.output_path(), Some("output/"));
        assert_eq!(actual.settings.site_url(), Some(""));
        assert!(actual.warnings.is_empty(), "{:?}", actual.warnings);
    }

    #[test]
    fn resolve_publish() {
        let project = Project::from_file("tests/fixtures/blog/_site.yml");
        let actual = project
            .resolve(&SettingsLoader::new(), Context::Publish)
            .unwrap();
        assert_eq!(actual.settings.output_path(), Some("static/"));
        assert_eq!(
            actual.settings.site_url(),
            Some("https://alschwalm.com/blog/static")
        );
        assert!(actual.settings.delete_output_directory());
        // Inherited from the base settings
        assert_eq!(
            actual.settings.text(SettingKey::SiteName),
            Some("Adam Schwalm")
        );
        assert_eq!(actual.warnings.len(), 1, "{:?}", actual.warnings);
        assert_eq!(actual.warnings[0].key, "relative_urls");
    }

    #[test]
    fn resolve_publish_without_publish_file() {
        let project = Project::from_file("tests/fixtures/minimal/_site.yml");
        assert_eq!(project.publish_file(), None);
        let preview = project
            .resolve(&SettingsLoader::new(), Context::Preview)
            .unwrap();
        let publish = project
            .resolve(&SettingsLoader::new(), Context::Publish)
            .unwrap();
        assert_eq!(preview, publish);
    }

    #[test]
    fn resolve_publish_unknown_override() {
        let project = Project::from_file("tests/fixtures/blog/_site.yml")
            .with_publish_file("tests/fixtures/typo/_publish.yml");
        let actual = project
            .resolve(&SettingsLoader::new(), Context::Publish)
            .unwrap_err();
        match actual {
            Error::Config(ConfigError::UnknownOverrideKey { key }) => {
                assert_eq!(key, "unknown_setting");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_publish_lenient() {
        let project = Project::from_file("tests/fixtures/blog/_site.yml")
            .with_publish_file("tests/fixtures/typo/_publish.yml");
        let loader = SettingsLoader::with_policy(OverridePolicy::Lenient);
        let actual = project.resolve(&loader, Context::Publish).unwrap();
        assert_eq!(actual.settings.output_path(), Some("static/"));
        let keys: Vec<_> = actual.warnings.iter().map(|w| w.key.as_str()).collect();
        assert_eq!(keys, ["unknown_setting"]);
    }

    #[test]
    fn resolve_missing_file() {
        let project = Project::from_file("tests/fixtures/blog/_missing.yml");
        let actual = project
            .resolve(&SettingsLoader::new(), Context::Preview)
            .unwrap_err();
        assert!(matches!(actual, Error::File(_)));
    }

    #[test]
    fn inspect_broken() {
        let project = Project::from_file("tests/fixtures/broken/_site.yml");
        let actual = project
            .inspect(&SettingsLoader::new(), Context::Publish)
            .unwrap();
        let keys: Vec<_> = actual.iter().map(ValidationIssue::key).collect();
        assert_eq!(keys, ["output_path", "article_url_pattern"]);
    }

    #[test]
    fn resolve_keeps_lenient_base_warnings() {
        let project = Project::from_file("tests/fixtures/lenient/_site.yml");
        let loader = SettingsLoader::with_policy(OverridePolicy::Lenient);
        for context in [Context::Preview, Context::Publish] {
            let actual = project.resolve(&loader, context).unwrap();
            let keys: Vec<_> = actual.warnings.iter().map(|w| w.key.as_str()).collect();
            assert_eq!(keys, ["sitename"], "{context}");
        }
    }

    #[test]
    fn resolve_blank_value_names_key() {
        let project = Project::from_file("tests/fixtures/blank_value/_site.yml");
        let actual = project
            .resolve(&SettingsLoader::new(), Context::Preview)
            .unwrap_err();
        match actual {
            Error::Config(error) => assert_eq!(error.key(), "site_subtitle"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
