//! Typed mapping from form fields to the JSON body sent to the inquiry endpoint.

use crate::config::Coercion;
use crate::form::field::Field;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl Coercion {
    pub fn apply(self, raw: &str) -> FieldValue {
        match self {
            Coercion::Text => FieldValue::Text(raw.to_string()),
            Coercion::Bool => FieldValue::Bool(raw == "true"),
        }
    }
}

/// One entry per named form field, values coerced per field declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormPayload(BTreeMap<String, FieldValue>);

impl FormPayload {
    pub fn from_fields(fields: &[Field]) -> Self {
        Self(
            fields
                .iter()
                .filter(|f| !f.name.is_empty())
                .map(|f| (f.name.clone(), f.coerce.apply(f.value())))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
