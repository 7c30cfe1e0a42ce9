// crates/folder_snippet/src/options.rs

use crate::error::SnippetError;
use crate::identifier::validate_identifier;
use folder_constants::{
    DEFAULT_AUXILIARY_VAR, DEFAULT_COMBINED_VAR, DEFAULT_QUERY_VAR, DEFAULT_TOPIC_VAR,
};
use serde_json::{Map, Value};

/// Options accepted by [`generate`](crate::generate).
///
/// Every field has a default, so `SnippetOptions::default()` reproduces a
/// call with no options at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Name bound to the topic folder array.
    pub topic_var: String,
    /// Name bound to the auxiliary folder array (only with `include_auxiliary`).
    pub auxiliary_var: String,
    /// Name bound to topic + auxiliary (only with `include_auxiliary`).
    pub combined_var: String,
    /// Name bound to the OR-joined query string.
    pub query_var: String,
    pub include_auxiliary: bool,
    pub with_query: bool,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            topic_var: DEFAULT_TOPIC_VAR.to_string(),
            auxiliary_var: DEFAULT_AUXILIARY_VAR.to_string(),
            combined_var: DEFAULT_COMBINED_VAR.to_string(),
            query_var: DEFAULT_QUERY_VAR.to_string(),
            include_auxiliary: false,
            with_query: true,
        }
    }
}

impl SnippetOptions {
    pub fn with_topic_var(mut self, name: impl Into<String>) -> Self {
        self.topic_var = name.into();
        self
    }

    pub fn with_auxiliary_var(mut self, name: impl Into<String>) -> Self {
        self.auxiliary_var = name.into();
        self
    }

    pub fn with_combined_var(mut self, name: impl Into<String>) -> Self {
        self.combined_var = name.into();
        self
    }

    pub fn with_query_var(mut self, name: impl Into<String>) -> Self {
        self.query_var = name.into();
        self
    }

    pub fn include_auxiliary(mut self, include: bool) -> Self {
        self.include_auxiliary = include;
        self
    }

    pub fn with_query(mut self, with_query: bool) -> Self {
        self.with_query = with_query;
        self
    }

    /// Parses a templater-style options object, e.g.
    /// `{"include_auxiliary": true, "queryVar": "q"}`.
    ///
    /// Missing keys and `null` values fall back to the defaults, unknown keys
    /// are ignored. A value of the wrong type is reported with the key that
    /// carried it.
    pub fn from_json(input: &str) -> Result<Self, SnippetError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| SnippetError::MalformedOptions(e.to_string()))?;

        let map = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(SnippetError::MalformedOptions(format!(
                    "expected an object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let mut opts = Self::default();
        if let Some(name) = string_option(&map, &["topicVar", "topicVariableName"])? {
            opts.topic_var = name;
        }
        if let Some(name) = string_option(&map, &["auxiliaryVar", "auxiliaryVariableName"])? {
            opts.auxiliary_var = name;
        }
        if let Some(name) = string_option(&map, &["combinedVar", "combinedVariableName"])? {
            opts.combined_var = name;
        }
        if let Some(name) = string_option(&map, &["queryVar", "queryVariableName"])? {
            opts.query_var = name;
        }
        if let Some(flag) = bool_option(&map, &["include_auxiliary", "includeAuxiliary"])? {
            opts.include_auxiliary = flag;
        }
        if let Some(flag) = bool_option(&map, &["withQuery"])? {
            opts.with_query = flag;
        }
        Ok(opts)
    }

    /// The identifiers that will actually be declared for these flags, in
    /// emission order, paired with the option that supplies them.
    pub fn declared_identifiers(&self) -> Vec<(&'static str, &str)> {
        let mut declared = vec![("topic_var", self.topic_var.as_str())];
        if self.include_auxiliary {
            declared.push(("auxiliary_var", self.auxiliary_var.as_str()));
            declared.push(("combined_var", self.combined_var.as_str()));
        }
        if self.with_query {
            declared.push(("query_var", self.query_var.as_str()));
        }
        declared
    }

    /// Rejects any declared identifier that would make the snippet invalid
    /// once the host evaluates it. Names that are not emitted are not checked.
    pub fn validate(&self) -> Result<(), SnippetError> {
        let declared = self.declared_identifiers();
        for (field, value) in &declared {
            validate_identifier(*field, value)?;
        }
        for (i, (first, value)) in declared.iter().enumerate() {
            if let Some((second, _)) = declared[i + 1..].iter().find(|(_, other)| other == value) {
                return Err(SnippetError::DuplicateIdentifier {
                    first: *first,
                    second: *second,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

fn string_option(
    map: &Map<String, Value>,
    keys: &[&'static str],
) -> Result<Option<String>, SnippetError> {
    for key in keys {
        match map.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) => return Ok(Some(s.clone())),
            Some(_) => {
                return Err(SnippetError::WrongType {
                    field: *key,
                    expected: "a string",
                })
            }
        }
    }
    Ok(None)
}

fn bool_option(
    map: &Map<String, Value>,
    keys: &[&'static str],
) -> Result<Option<bool>, SnippetError> {
    for key in keys {
        match map.get(*key) {
            None | Some(Value::Null) => continue,
            Some(Value::Bool(b)) => return Ok(Some(*b)),
            Some(_) => {
                return Err(SnippetError::WrongType {
                    field: *key,
                    expected: "a boolean",
                })
            }
        }
    }
    Ok(None)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
