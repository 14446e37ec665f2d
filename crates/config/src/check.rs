use crate::ConfigError;
use crate::Pattern;
use crate::RawValue;
use crate::SettingKey;
use crate::SettingValue;
use crate::ValueKind;

/// Check that `value` has the right type and format for `key`.
///
/// Only looks at the one value; rules spanning several settings live with the loader.
pub fn check_value(key: SettingKey, value: &SettingValue) -> Result<(), ConfigError> {
    match (key.kind(), value) {
        (ValueKind::Text, SettingValue::Text(text)) => {
            if key.rejects_blank() && text.trim().is_empty() {
                Err(ConfigError::malformed(key, "must not be blank"))
            } else {
                Ok(())
            }
        }
        // Blank is how relative-URL setups spell "no site url"
        (ValueKind::Url, SettingValue::Text(url)) if url.is_empty() => Ok(()),
        (ValueKind::Url, SettingValue::Text(url)) => {
            check_site_url(url).map_err(|reason| ConfigError::malformed(key, reason))
        }
        (ValueKind::Path, SettingValue::Text(path)) => {
            crate::path::check_rel_path(path).map_err(|reason| ConfigError::malformed(key, reason))
        }
        (ValueKind::Pattern, SettingValue::Text(pattern)) => Pattern::parse(pattern)
            .map(|_| ())
            .map_err(|e| ConfigError::malformed(key, e.to_string())),
        (ValueKind::Bool, SettingValue::Bool(_)) => Ok(()),
        (ValueKind::Integer, SettingValue::Integer(value)) => {
            if *value < 1 {
                Err(ConfigError::malformed(
                    key,
                    format!("must be at least 1, found {value}"),
                ))
            } else {
                Ok(())
            }
        }
        (ValueKind::Pairs, SettingValue::Pairs(pairs)) => check_pairs(pairs)
            .map_err(|reason| ConfigError::malformed(key, reason)),
        (kind, value) => Err(ConfigError::malformed(
            key,
            format!("expected {kind}, found {}", value.type_name()),
        )),
    }
}

/// Take `value` as written for `key`, failing when it has no [`SettingValue`] shape at all.
///
/// The format of the value is left to [`check_value`].
pub fn check_raw_value(key: SettingKey, value: &RawValue) -> Result<SettingValue, ConfigError> {
    match value {
        RawValue::Setting(value) => Ok(value.clone()),
        RawValue::Other(_) => Err(ConfigError::malformed(
            key,
            format!("expected {}, found {}", key.kind(), value.type_name()),
        )),
    }
}

fn check_site_url(raw: &str) -> Result<(), String> {
    let url = url::Url::parse(raw).map_err(|e| format!("`{raw}` is not a valid URL: {e}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!(
            "`{raw}` must use http or https, found `{}`",
            url.scheme()
        ));
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("`{raw}` has no host"));
    }
    Ok(())
}

fn check_pairs(pairs: &[(String, String)]) -> Result<(), String> {
    for (idx, (label, link)) in pairs.iter().enumerate() {
        if label.trim().is_empty() {
            return Err(format!("entry {idx} has a blank label"));
        }
        if link.trim().is_empty() {
            return Err(format!("`{label}` has a blank URL"));
        }
        url::Url::parse(link).map_err(|e| format!("`{label}` URL `{link}` is invalid: {e}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn reason(result: Result<(), ConfigError>) -> String {
        match result.unwrap_err() {
            ConfigError::MalformedValue { reason, .. } => reason,
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn site_url_https() {
        let value = SettingValue::from("https://example.com/blog/static");
        assert_eq!(check_value(SettingKey::SiteUrl, &value), Ok(()));
    }

    #[test]
    fn site_url_blank() {
        let value = SettingValue::from("");
        assert_eq!(check_value(SettingKey::SiteUrl, &value), Ok(()));
    }

    #[test]
    fn site_url_relative() {
        let value = SettingValue::from("example.com/blog");
        assert!(check_value(SettingKey::SiteUrl, &value).is_err());
    }

    #[test]
    fn site_url_ftp() {
        let value = SettingValue::from("ftp://example.com");
        let actual = reason(check_value(SettingKey::SiteUrl, &value));
        assert!(actual.contains("http or https"), "{actual}");
    }

    #[test]
    fn output_path_empty() {
        let value = SettingValue::from("");
        let actual = check_value(SettingKey::OutputPath, &value).unwrap_err();
        assert_eq!(actual.key(), "output_path");
    }

    #[test]
    fn relative_urls_wrong_type() {
        let value = SettingValue::from("yes");
        let actual = reason(check_value(SettingKey::RelativeUrls, &value));
        assert_eq!(actual, "expected bool, found text");
    }

    #[test]
    fn pattern_unknown_token() {
        let value = SettingValue::from("{date:%Y}/{bogus}/");
        let actual = reason(check_value(SettingKey::ArticleUrlPattern, &value));
        assert!(actual.contains("`bogus`"), "{actual}");
    }

    #[test]
    fn pattern_recognized_tokens() {
        let value = SettingValue::from("{date:%Y}/{date:%m}/{date:%d}/{slug}/");
        assert_eq!(check_value(SettingKey::ArticleUrlPattern, &value), Ok(()));
    }

    #[test]
    fn pagination_zero() {
        let value = SettingValue::Integer(0);
        assert!(check_value(SettingKey::DefaultPagination, &value).is_err());
    }

    #[test]
    fn default_lang_blank() {
        let value = SettingValue::from("  ");
        assert!(check_value(SettingKey::DefaultLang, &value).is_err());
    }

    #[test]
    fn site_subtitle_blank_allowed() {
        let value = SettingValue::from("");
        assert_eq!(check_value(SettingKey::SiteSubtitle, &value), Ok(()));
    }

    #[test]
    fn raw_null_subtitle() {
        let value = RawValue::Other(serde_json::Value::Null);
        let actual = check_raw_value(SettingKey::SiteSubtitle, &value).unwrap_err();
        assert_eq!(
            actual.to_string(),
            "invalid value for `site_subtitle`: expected text, found null"
        );
    }

    #[test]
    fn raw_float_pagination() {
        let value = RawValue::Other(serde_json::json!(2.5));
        let actual = reason(check_raw_value(SettingKey::DefaultPagination, &value).map(|_| ()));
        assert_eq!(actual, "expected integer, found float");
    }

    #[test]
    fn raw_setting_passes_through() {
        let value = RawValue::from("output/");
        let actual = check_raw_value(SettingKey::OutputPath, &value).unwrap();
        assert_eq!(actual, SettingValue::from("output/"));
    }

    #[test]
    fn social_links_valid() {
        let value = SettingValue::pairs([
            ("twitter", "https://twitter.com/example"),
            ("email", "mailto:me@example.com"),
        ]);
        assert_eq!(check_value(SettingKey::SocialLinks, &value), Ok(()));
    }

    #[test]
    fn social_links_blank_label() {
        let value = SettingValue::pairs([("", "https://twitter.com/example")]);
        let actual = reason(check_value(SettingKey::SocialLinks, &value));
        assert_eq!(actual, "entry 0 has a blank label");
    }

    #[test]
    fn social_links_blank_url() {
        let value = SettingValue::pairs([("rss", "")]);
        let actual = reason(check_value(SettingKey::SocialLinks, &value));
        assert_eq!(actual, "`rss` has a blank URL");
    }
}
