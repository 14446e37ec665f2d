use std::fmt;

/// A single setting's value, as found in a settings file.
///
/// Variant order matters: settings files are untyped, so `true` must be tried as a
/// [`SettingValue::Bool`] before falling back to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Integer(i64),
    Text(String),
    Pairs(Vec<(String, String)>),
}

impl SettingValue {
    /// Build a [`SettingValue::Pairs`] from anything yielding `(label, url)`.
    pub fn pairs<L, U>(pairs: impl IntoIterator<Item = (L, U)>) -> Self
    where
        L: Into<String>,
        U: Into<String>,
    {
        Self::Pairs(
            pairs
                .into_iter()
                .map(|(label, url)| (label.into(), url.into()))
                .collect(),
        )
    }

    /// Human name of the variant, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SettingValue::Bool(_) => "bool",
            SettingValue::Integer(_) => "integer",
            SettingValue::Text(_) => "text",
            SettingValue::Pairs(_) => "pairs",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            SettingValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_pairs(&self) -> Option<&[(String, String)]> {
        match self {
            SettingValue::Pairs(pairs) => Some(pairs.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Bool(value) => write!(f, "{value}"),
            SettingValue::Integer(value) => write!(f, "{value}"),
            SettingValue::Text(value) => write!(f, "{value:?}"),
            SettingValue::Pairs(pairs) => {
                let pairs = pairs
                    .iter()
                    .map(|(label, url)| format!("({label:?}, {url:?})"));
                write!(f, "[{}]", itertools::join(pairs, ", "))
            }
        }
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for SettingValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A value exactly as written in a settings file.
///
/// Whatever doesn't fit a [`SettingValue`] (null, floats, maps) is kept as-is, so it can be
/// reported against the setting it was written for instead of failing the whole file.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Setting(SettingValue),
    Other(serde_json::Value),
}

impl RawValue {
    pub fn as_setting(&self) -> Option<&SettingValue> {
        match self {
            RawValue::Setting(value) => Some(value),
            RawValue::Other(_) => None,
        }
    }

    /// Human name of the value's shape, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Setting(value) => value.type_name(),
            RawValue::Other(serde_json::Value::Null) => "null",
            RawValue::Other(serde_json::Value::Bool(_)) => "bool",
            RawValue::Other(serde_json::Value::Number(number)) if number.is_f64() => "float",
            RawValue::Other(serde_json::Value::Number(_)) => "out-of-range integer",
            RawValue::Other(serde_json::Value::String(_)) => "text",
            RawValue::Other(serde_json::Value::Array(_)) => "list",
            RawValue::Other(serde_json::Value::Object(_)) => "map",
        }
    }
}

impl From<SettingValue> for RawValue {
    fn from(value: SettingValue) -> Self {
        Self::Setting(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Setting(value.into())
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Setting(value.into())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Setting(value.into())
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Setting(value.into())
    }
}
