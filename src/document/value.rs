use indexmap::IndexMap;

/// Generic value tree produced by the XML adapter.
///
/// Element text and attribute values that look numeric are coerced to
/// `Int` at parse time. Elements that appear more than once under the
/// same parent are collected into a `List`, so a field can surface as
/// either a bare `Map` or a `List` of maps depending on the source
/// document. Consumers normalize that cardinality with [`XmlValue::items`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlValue {
    Text(String),
    Int(i64),
    Map(IndexMap<String, XmlValue>),
    List(Vec<XmlValue>),
}

impl XmlValue {
    /// Looks up a child entry by key. Returns `None` for non-map values.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Map(entries) => entries.get(key),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Normalizes variable cardinality: a `List` yields its elements in
    /// document order, any other value yields itself as a singleton.
    #[must_use]
    pub fn items(&self) -> Vec<&Self> {
        match self {
            Self::List(values) => values.iter().collect(),
            other => vec![other],
        }
    }

    /// Coerces raw element or attribute text into a typed scalar.
    #[must_use]
    pub fn scalar(raw: &str) -> Self {
        raw.parse::<i64>()
            .map_or_else(|_| Self::Text(raw.to_string()), Self::Int)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
