use std::fmt;

/// Version of the generator-facing schema described by [`SettingKey::ALL`].
///
/// Bump this whenever a key is added, removed or changes kind so the external generator can
/// tell which contract a settings dump follows.
pub const SCHEMA_VERSION: &str = "1";

/// A recognized setting name.
///
/// This is the allow-list of everything the external generator understands.  Names outside of
/// it are rejected (or ignored, under a lenient policy) before a [`crate::ConfigurationSet`] is
/// built.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SettingKey {
    SiteName,
    SiteSubtitle,
    Author,
    SiteUrl,
    RelativeUrls,
    OutputPath,
    DeleteOutputDirectory,
    FeedPath,
    HomeCoverImage,
    ArticleUrlPattern,
    ArticleSavePattern,
    PageUrlPattern,
    PageSavePattern,
    SocialLinks,
    Links,
    DefaultPagination,
    DefaultLang,
    Timezone,
    DisqusSitename,
    GoogleAnalytics,
}

impl SettingKey {
    pub const ALL: [SettingKey; 20] = [
        SettingKey::SiteName,
        SettingKey::SiteSubtitle,
        SettingKey::Author,
        SettingKey::SiteUrl,
        SettingKey::RelativeUrls,
        SettingKey::OutputPath,
        SettingKey::DeleteOutputDirectory,
        SettingKey::FeedPath,
        SettingKey::HomeCoverImage,
        SettingKey::ArticleUrlPattern,
        SettingKey::ArticleSavePattern,
        SettingKey::PageUrlPattern,
        SettingKey::PageSavePattern,
        SettingKey::SocialLinks,
        SettingKey::Links,
        SettingKey::DefaultPagination,
        SettingKey::DefaultLang,
        SettingKey::Timezone,
        SettingKey::DisqusSitename,
        SettingKey::GoogleAnalytics,
    ];

    /// Keys every resolved configuration must carry.
    pub const REQUIRED: [SettingKey; 3] = [
        SettingKey::SiteUrl,
        SettingKey::RelativeUrls,
        SettingKey::OutputPath,
    ];

    /// Look up a key by its settings-file name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|key| key.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SettingKey::SiteName => "site_name",
            SettingKey::SiteSubtitle => "site_subtitle",
            SettingKey::Author => "author",
            SettingKey::SiteUrl => "site_url",
            SettingKey::RelativeUrls => "relative_urls",
            SettingKey::OutputPath => "output_path",
            SettingKey::DeleteOutputDirectory => "delete_output_directory",
            SettingKey::FeedPath => "feed_path",
            SettingKey::HomeCoverImage => "home_cover_image",
            SettingKey::ArticleUrlPattern => "article_url_pattern",
            SettingKey::ArticleSavePattern => "article_save_pattern",
            SettingKey::PageUrlPattern => "page_url_pattern",
            SettingKey::PageSavePattern => "page_save_pattern",
            SettingKey::SocialLinks => "social_links",
            SettingKey::Links => "links",
            SettingKey::DefaultPagination => "default_pagination",
            SettingKey::DefaultLang => "default_lang",
            SettingKey::Timezone => "timezone",
            SettingKey::DisqusSitename => "disqus_sitename",
            SettingKey::GoogleAnalytics => "google_analytics",
        }
    }

    /// The name the external generator reads this setting under.
    pub fn generator_name(self) -> &'static str {
        match self {
            SettingKey::SiteName => "SITENAME",
            SettingKey::SiteSubtitle => "SITESUBTITLE",
            SettingKey::Author => "AUTHOR",
            SettingKey::SiteUrl => "SITEURL",
            SettingKey::RelativeUrls => "RELATIVE_URLS",
            SettingKey::OutputPath => "OUTPUT_PATH",
            SettingKey::DeleteOutputDirectory => "DELETE_OUTPUT_DIRECTORY",
            SettingKey::FeedPath => "FEED_ALL_ATOM",
            SettingKey::HomeCoverImage => "HOME_COVER",
            SettingKey::ArticleUrlPattern => "ARTICLE_URL",
            SettingKey::ArticleSavePattern => "ARTICLE_SAVE_AS",
            SettingKey::PageUrlPattern => "PAGE_URL",
            SettingKey::PageSavePattern => "PAGE_SAVE_AS",
            SettingKey::SocialLinks => "SOCIAL",
            SettingKey::Links => "LINKS",
            SettingKey::DefaultPagination => "DEFAULT_PAGINATION",
            SettingKey::DefaultLang => "DEFAULT_LANG",
            SettingKey::Timezone => "TIMEZONE",
            SettingKey::DisqusSitename => "DISQUS_SITENAME",
            SettingKey::GoogleAnalytics => "GOOGLE_ANALYTICS",
        }
    }

    pub fn kind(self) -> ValueKind {
        match self {
            SettingKey::SiteName
            | SettingKey::SiteSubtitle
            | SettingKey::Author
            | SettingKey::DefaultLang
            | SettingKey::Timezone
            | SettingKey::DisqusSitename
            | SettingKey::GoogleAnalytics => ValueKind::Text,
            SettingKey::SiteUrl => ValueKind::Url,
            SettingKey::RelativeUrls | SettingKey::DeleteOutputDirectory => ValueKind::Bool,
            SettingKey::OutputPath | SettingKey::FeedPath | SettingKey::HomeCoverImage => {
                ValueKind::Path
            }
            SettingKey::ArticleUrlPattern
            | SettingKey::ArticleSavePattern
            | SettingKey::PageUrlPattern
            | SettingKey::PageSavePattern => ValueKind::Pattern,
            SettingKey::SocialLinks | SettingKey::Links => ValueKind::Pairs,
            SettingKey::DefaultPagination => ValueKind::Integer,
        }
    }

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// Text settings the generator can't work with when blank.
    pub(crate) fn rejects_blank(self) -> bool {
        matches!(self, SettingKey::DefaultLang | SettingKey::Timezone)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The shape of value a [`SettingKey`] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Text,
    /// Absolute `http(s)` URL, or blank for relative-URL setups
    Url,
    /// Relative path inside the project
    Path,
    /// Placeholder-bearing URL or save-as template
    Pattern,
    Bool,
    Integer,
    /// Ordered `(label, url)` pairs
    Pairs,
}

impl ValueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Url => "url",
            ValueKind::Path => "path",
            ValueKind::Pattern => "pattern",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Pairs => "pairs",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
