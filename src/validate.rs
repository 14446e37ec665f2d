use siteconf_config::path::is_project_root;
use siteconf_config::ArticleSample;
use siteconf_config::ConfigError;
use siteconf_config::ConfigWarning;
use siteconf_config::ConfigurationSet;
use siteconf_config::Pattern;
use siteconf_config::SettingKey;
use siteconf_config::ValidationIssue;

/// URL patterns and the save-as patterns that must agree with them.
const PATTERN_PAIRS: [(SettingKey, SettingKey); 2] = [
    (SettingKey::ArticleUrlPattern, SettingKey::ArticleSavePattern),
    (SettingKey::PageUrlPattern, SettingKey::PageSavePattern),
];

/// Run every structural check on `config`, collecting instead of failing.
///
/// Issues are ordered: missing keys, then per-value problems in key order, then rules that
/// span several settings.
pub fn validate(config: &ConfigurationSet) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for key in SettingKey::REQUIRED {
        if !config.contains(key) {
            issues.push(ConfigError::MissingKey { key }.into());
        }
    }

    for (key, value) in config.iter() {
        if let Err(error) = siteconf_config::check_value(key, value) {
            issues.push(error.into());
        }
    }

    check_site_url(config, &mut issues);
    check_output_directory(config, &mut issues);
    check_save_patterns(config, &mut issues);

    issues
}

fn check_site_url(config: &ConfigurationSet, issues: &mut Vec<ValidationIssue>) {
    let Some(site_url) = config.site_url() else {
        return;
    };
    match config.relative_urls() {
        Some(false) if site_url.is_empty() => {
            issues.push(
                ConfigError::MalformedValue {
                    key: SettingKey::SiteUrl,
                    reason: "an absolute URL is required when `relative_urls` is false"
                        .to_owned(),
                }
                .into(),
            );
        }
        Some(true) if !site_url.is_empty() => {
            issues.push(
                ConfigWarning::new(
                    SettingKey::RelativeUrls.as_str(),
                    format!("links are relative, `site_url` ({site_url}) only fills absolute links"),
                )
                .into(),
            );
        }
        _ => {}
    }
}

fn check_output_directory(config: &ConfigurationSet, issues: &mut Vec<ValidationIssue>) {
    if !config.delete_output_directory() {
        return;
    }
    if let Some(output_path) = config.output_path() {
        if is_project_root(output_path) {
            issues.push(
                ConfigWarning::new(
                    SettingKey::DeleteOutputDirectory.as_str(),
                    format!("clearing `output_path` ({output_path}) deletes the project root"),
                )
                .into(),
            );
        }
    }
}

fn check_save_patterns(config: &ConfigurationSet, issues: &mut Vec<ValidationIssue>) {
    let sample = ArticleSample::default();
    for (url_key, save_key) in PATTERN_PAIRS {
        let (Some(url), Some(save)) = (config.text(url_key), config.text(save_key)) else {
            continue;
        };
        // Malformed patterns were already reported above
        let (Ok(url), Ok(save)) = (Pattern::parse(url), Pattern::parse(save)) else {
            continue;
        };

        let (Ok(served), Ok(written)) = (url.render(&sample), save.render(&sample)) else {
            continue;
        };
        let served = siteconf_config::format_url_as_file(served);
        let written = relative_path::RelativePath::new(written.trim_start_matches('/')).normalize();
        if served != written {
            issues.push(
                ConfigWarning::new(
                    save_key.as_str(),
                    format!("writes `{written}` but `{url_key}` serves `{served}`"),
                )
                .into(),
            );
        }
    }
}
