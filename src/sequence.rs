//! Sequence and Outcome - the data that flows in and out of the engine.
//!
//! A [`Sequence`] is homogeneous: all numbers or all text, compared with
//! natural ordering. Parsing raw user text into one is the caller's job.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// Element type of a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Numeric,
    Text,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Numeric => "numeric",
            ElementKind::Text => "text",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single element or scalar (search target, majority element).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    pub fn kind(&self) -> ElementKind {
        match self {
            Value::Number(_) => ElementKind::Numeric,
            Value::Text(_) => ElementKind::Text,
        }
    }

    /// Human-readable form, with `precision` decimals for numbers if set
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            Value::Number(x) => x.render(precision),
            Value::Text(s) => s.render(precision),
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

/// Ordered, homogeneous input to an algorithm.
///
/// Serialized as a plain JSON array; an empty array reads back as
/// `Numeric`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sequence {
    Numeric(Vec<f64>),
    Text(Vec<String>),
}

impl Sequence {
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Sequence::Numeric(v) => v.len(),
            Sequence::Text(v) => v.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Sequence::Numeric(_) => ElementKind::Numeric,
            Sequence::Text(_) => ElementKind::Text,
        }
    }

    /// Numeric view, if this is a numeric sequence
    pub fn as_numeric(&self) -> Option<&[f64]> {
        match self {
            Sequence::Numeric(v) => Some(v),
            Sequence::Text(_) => None,
        }
    }

    /// Render as `[a, b, c]`
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            Sequence::Numeric(v) => render_list(v, precision),
            Sequence::Text(v) => render_list(v, precision),
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Serialization(e.to_string()))
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(v: Vec<f64>) -> Self {
        Sequence::Numeric(v)
    }
}

impl From<&[f64]> for Sequence {
    fn from(v: &[f64]) -> Self {
        Sequence::Numeric(v.to_vec())
    }
}

impl From<Vec<String>> for Sequence {
    fn from(v: Vec<String>) -> Self {
        Sequence::Text(v)
    }
}

impl From<Vec<&str>> for Sequence {
    fn from(v: Vec<&str>) -> Self {
        Sequence::Text(v.into_iter().map(str::to_string).collect())
    }
}

/// Elements that can appear in an explanation string.
pub(crate) trait Render {
    fn render(&self, precision: Option<usize>) -> String;
}

impl Render for f64 {
    fn render(&self, precision: Option<usize>) -> String {
        match precision {
            Some(p) => format!("{:.*}", p, self),
            None => format!("{}", self),
        }
    }
}

impl Render for String {
    fn render(&self, _precision: Option<usize>) -> String {
        self.clone()
    }
}

pub(crate) fn render_list<T: Render>(items: &[T], precision: Option<usize>) -> String {
    let parts: Vec<String> = items.iter().map(|x| x.render(precision)).collect();
    format!("[{}]", parts.join(", "))
}

/// Computed value of an invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum OutcomeValue {
    /// Sorting drivers: the sorted working copy
    Sorted(Sequence),
    /// Search drivers: index of the match, `None` when absent
    Position(Option<usize>),
    /// Median and maximum subarray sum
    Number(f64),
    /// Majority element, `None` when no element is a strict majority
    Element(Option<Value>),
    /// Inversion count
    Count(u64),
}

impl OutcomeValue {
    /// Short display form, the way a result line would show it
    pub fn render(&self, precision: Option<usize>) -> String {
        match self {
            OutcomeValue::Sorted(seq) => seq.render(precision),
            OutcomeValue::Position(Some(p)) => format!("Found at position {}", p),
            OutcomeValue::Position(None) => "Not found".to_string(),
            OutcomeValue::Number(x) => x.render(precision),
            OutcomeValue::Element(Some(v)) => v.render(precision),
            OutcomeValue::Element(None) => "No majority element".to_string(),
            OutcomeValue::Count(c) => c.to_string(),
        }
    }
}

/// Result of one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub result: OutcomeValue,

    /// The primary input exactly as the caller supplied it
    pub original_input: Sequence,

    /// Describes how the result was obtained
    pub explanation: String,
}

impl Outcome {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Serialization(e.to_string()))
    }
}
