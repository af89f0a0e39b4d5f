use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// One input record: an ordered map of field name to JSON value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Datum {
    fields: IndexMap<String, Value>,
}

impl Datum {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    /// Category key of `field`, if the value can act as one.
    #[must_use]
    pub fn category_key(&self, field: &str) -> Option<String> {
        self.field(field).and_then(category_key_of)
    }

    /// Finite numeric value of `field`.
    #[must_use]
    pub fn number(&self, field: &str) -> Option<f64> {
        self.field(field)
            .and_then(Value::as_f64)
            .filter(|value| value.is_finite())
    }
}

impl From<IndexMap<String, Value>> for Datum {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }
}

/// Maps a field value onto a category key.
///
/// Strings are used verbatim, numbers and booleans are stringified. Nulls and
/// nested values carry no key.
#[must_use]
pub fn category_key_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Parses a JSON array of flat objects into records.
pub fn parse_records_json(input: &str) -> ChartResult<Vec<Datum>> {
    serde_json::from_str::<Vec<Datum>>(input)
        .map_err(|e| ChartError::InvalidData(format!("failed to parse records json: {e}")))
}
