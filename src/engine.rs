//! Algorithm Engine - the uniform invocation contract.
//!
//! The engine validates an invocation against the algorithm's
//! preconditions, dispatches it to the descriptor's operation and hands
//! back a fresh [`Outcome`]. It keeps no state between calls apart from
//! its immutable configuration, so one engine can be shared freely.

use crate::error::{EngineError, Result};
use crate::registry::{AlgorithmId, ComplexityProfile, Request};
use crate::sequence::{Outcome, Sequence, Value};
use serde::{Deserialize, Serialize};

/// Entry of [`Engine::list_algorithms`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmSummary {
    pub id: AlgorithmId,
    pub display_name: &'static str,
}

/// Static informational text returned by [`Engine::describe`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmDescription {
    pub id: AlgorithmId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub info: &'static str,
    pub complexity: ComplexityProfile,
    pub requires_target: bool,
}

/// One owned invocation, for batch execution and JSON transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub algorithm: AlgorithmId,
    pub primary: Sequence,
    #[serde(default)]
    pub secondary: Option<Sequence>,
    #[serde(default)]
    pub target: Option<Value>,
}

impl Invocation {
    pub fn new(algorithm: AlgorithmId, primary: impl Into<Sequence>) -> Self {
        Self {
            algorithm,
            primary: primary.into(),
            secondary: None,
            target: None,
        }
    }

    /// Set the second input (median only)
    pub fn with_secondary(mut self, secondary: impl Into<Sequence>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Set the search target
    pub fn with_target(mut self, target: impl Into<Value>) -> Self {
        self.target = Some(target.into());
        self
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upper bound on primary + secondary length
    pub max_input_len: usize,

    /// Decimals for numbers in explanations; natural formatting if unset
    pub explanation_precision: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: 1_000_000,
            explanation_precision: None,
        }
    }
}

impl EngineConfig {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| EngineError::Serialization(e.to_string()))
    }

    /// Deserialize from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::Serialization(e.to_string()))
    }
}

/// The algorithm engine.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with custom configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Get engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// All algorithms, in a fixed order, for populating a selector
    pub fn list_algorithms(&self) -> Vec<AlgorithmSummary> {
        AlgorithmId::ALL
            .iter()
            .map(|id| AlgorithmSummary {
                id: *id,
                display_name: id.descriptor().name,
            })
            .collect()
    }

    /// Static description and complexity profile of one algorithm
    pub fn describe(&self, id: AlgorithmId) -> AlgorithmDescription {
        let d = id.descriptor();
        AlgorithmDescription {
            id,
            display_name: d.name,
            description: d.description,
            info: d.info,
            complexity: d.complexity,
            requires_target: id.requires_target(),
        }
    }

    /// Look up an algorithm by its external key and describe it
    pub fn describe_key(&self, key: &str) -> Result<AlgorithmDescription> {
        Ok(self.describe(key.parse()?))
    }

    /// Run one algorithm.
    ///
    /// Fails with an invalid-argument error when a search target is
    /// missing, the input is empty for an algorithm that needs elements,
    /// the element types do not fit the algorithm, or the input is longer
    /// than [`EngineConfig::max_input_len`]. Neither input is modified.
    pub fn execute(
        &self,
        id: AlgorithmId,
        primary: &Sequence,
        secondary: Option<&Sequence>,
        target: Option<&Value>,
    ) -> Result<Outcome> {
        let descriptor = id.descriptor();

        log::debug!(
            "execute {}: primary_len={} secondary_len={:?} target={}",
            id,
            primary.len(),
            secondary.map(Sequence::len),
            target.is_some()
        );

        if let Err(err) = self.validate(id, primary, secondary, target) {
            log::warn!("rejected {}: {}", id, err);
            return Err(err);
        }

        let secondary = if id.accepts_secondary() {
            secondary
        } else {
            if secondary.is_some() {
                log::debug!("{} ignores the secondary input", id);
            }
            None
        };

        let request = Request {
            primary,
            secondary,
            target,
            precision: self.config.explanation_precision,
        };

        let outcome = (descriptor.operation)(&request).map_err(|err| {
            log::warn!("rejected {}: {}", id, err);
            err
        })?;

        log::debug!("{} done: {}", id, outcome.explanation);
        Ok(outcome)
    }

    /// Run an algorithm named by its external key (`"mergeSort"`, ...)
    pub fn execute_key(
        &self,
        key: &str,
        primary: &Sequence,
        secondary: Option<&Sequence>,
        target: Option<&Value>,
    ) -> Result<Outcome> {
        let id = key.parse::<AlgorithmId>().map_err(|err| {
            log::warn!("rejected {}: {}", key, err);
            err
        })?;
        self.execute(id, primary, secondary, target)
    }

    /// Run an owned invocation
    pub fn run(&self, invocation: &Invocation) -> Result<Outcome> {
        self.execute(
            invocation.algorithm,
            &invocation.primary,
            invocation.secondary.as_ref(),
            invocation.target.as_ref(),
        )
    }

    /// Run independent invocations; one failure does not stop the rest
    pub fn execute_batch(&self, invocations: &[Invocation]) -> Vec<Result<Outcome>> {
        invocations.iter().map(|inv| self.run(inv)).collect()
    }

    fn validate(
        &self,
        id: AlgorithmId,
        primary: &Sequence,
        secondary: Option<&Sequence>,
        target: Option<&Value>,
    ) -> Result<()> {
        let name = id.descriptor().name;

        let len = if id.accepts_secondary() {
            primary.len() + secondary.map_or(0, Sequence::len)
        } else {
            primary.len()
        };
        if len > self.config.max_input_len {
            return Err(EngineError::InputTooLarge {
                len,
                limit: self.config.max_input_len,
            });
        }

        if id.requires_target() && target.is_none() {
            return Err(EngineError::MissingTarget { algorithm: name });
        }

        // The median only needs elements across both inputs
        if id.requires_non_empty() && len == 0 {
            return Err(EngineError::EmptyInput { algorithm: name });
        }

        Ok(())
    }
}
