//! Named, optional string arguments for one request.

use serde::{ser::SerializeMap, Serialize, Serializer};

/// The parameter set of a single operation.
///
/// Entries keep the order in which the operation declares them. A `None`
/// value means the parameter was not supplied: it is left out of the form
/// body entirely rather than being sent as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(&'static str, Option<String>)>,
}

impl Params {
    /// Builds a parameter set from `(name, value)` pairs.
    ///
    /// Names are expected to be unique; they are taken from
    /// [`OperationKind::param_names`](crate::operation::OperationKind::param_names).
    pub(crate) fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, Option<String>)>,
    {
        Self {
            entries: pairs.into_iter().collect(),
        }
    }

    /// Returns the value of `name`, or `None` if it is absent or undeclared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Iterates over the parameters that carry a value.
    pub fn present(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries
            .iter()
            .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
    }

    /// Names of the declared parameters that have no value.
    pub fn missing(&self) -> Vec<&'static str> {
        self.entries
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| *key)
            .collect()
    }

    /// Number of declared parameters, present or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the operation declares no parameters.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Params {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in &self.entries {
            match value {
                Some(value) => map.serialize_entry(key, value)?,
                None => log::debug!("omitting absent parameter `{}`", key),
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Params {
        Params::from_pairs([
            ("board", Some("b".to_string())),
            ("thread", None),
            ("title", Some("hello world".to_string())),
        ])
    }

    #[test]
    fn test_get_and_missing() {
        let params = sample();
        assert_eq!(params.len(), 3);
        assert_eq!(params.get("board"), Some("b"));
        assert_eq!(params.get("thread"), None);
        assert_eq!(params.get("nope"), None);
        assert_eq!(params.missing(), vec!["thread"]);
    }

    #[test]
    fn test_present_keeps_declaration_order() {
        let params = sample();
        let present: Vec<_> = params.present().collect();
        assert_eq!(present, vec![("board", "b"), ("title", "hello world")]);
    }

    #[test]
    fn test_serialize_skips_absent_values() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "board": "b", "title": "hello world" })
        );
    }

    #[test]
    fn test_empty_set_serializes_to_empty_map() {
        let params = Params::default();
        assert!(params.is_empty());
        assert_eq!(serde_json::to_string(&params).unwrap(), "{}");
    }
}
