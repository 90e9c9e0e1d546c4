//! WebAssembly bindings for the algorithm engine.
//!
//! Provides a JavaScript-friendly API for browser and Node.js environments.
//! Inputs arrive already typed; splitting user text into numbers or
//! strings is left to the page.
//!
//! ## Usage (JavaScript/TypeScript)
//!
//! ```javascript
//! import init, { WasmAlgorithmEngine } from 'dnc-engine';
//!
//! await init();
//!
//! const engine = new WasmAlgorithmEngine();
//!
//! const options = JSON.parse(engine.listAlgorithms());
//! const info = JSON.parse(engine.describe('quickSort'));
//! console.log(info.complexity.worst);
//!
//! const outcome = JSON.parse(engine.execute('binarySearch', [5, 3, 1, 4, 2], null, 4));
//! console.log(outcome.explanation);
//! ```

use crate::engine::{Engine, EngineConfig, Invocation};
use crate::sequence::{Sequence, Value};
use js_sys::Array;
use wasm_bindgen::prelude::*;

/// Initialize the WASM module (call once at startup)
#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
}

/// WASM-compatible algorithm engine
#[wasm_bindgen]
pub struct WasmAlgorithmEngine {
    engine: Engine,
}

impl Default for WasmAlgorithmEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl WasmAlgorithmEngine {
    /// Create a new engine with default configuration
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
        }
    }

    /// Create with custom configuration (JSON)
    #[wasm_bindgen(js_name = "withConfig")]
    pub fn with_config(config_json: &str) -> Result<WasmAlgorithmEngine, JsValue> {
        let config = EngineConfig::from_json(config_json)?;

        Ok(Self {
            engine: Engine::with_config(config),
        })
    }

    /// List `{id, display_name}` entries as JSON
    #[wasm_bindgen(js_name = "listAlgorithms")]
    pub fn list_algorithms(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.engine.list_algorithms())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Algorithm keys only, in listing order
    #[wasm_bindgen(js_name = "algorithmKeys")]
    pub fn algorithm_keys(&self) -> Array {
        self.engine
            .list_algorithms()
            .iter()
            .map(|s| JsValue::from_str(s.id.key()))
            .collect()
    }

    /// Description and complexity profile as JSON
    #[wasm_bindgen(js_name = "describe")]
    pub fn describe(&self, key: &str) -> Result<String, JsValue> {
        let description = self.engine.describe_key(key)?;
        serde_json::to_string(&description)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Run an algorithm over numeric input; returns the Outcome as JSON
    #[wasm_bindgen(js_name = "execute")]
    pub fn execute(
        &self,
        key: &str,
        primary: Vec<f64>,
        secondary: Option<Vec<f64>>,
        target: Option<f64>,
    ) -> Result<String, JsValue> {
        let primary = Sequence::Numeric(primary);
        let secondary = secondary.map(Sequence::Numeric);
        let target = target.map(Value::Number);

        let outcome =
            self.engine
                .execute_key(key, &primary, secondary.as_ref(), target.as_ref())?;
        Ok(outcome.to_json()?)
    }

    /// Run an algorithm over text input; returns the Outcome as JSON
    #[wasm_bindgen(js_name = "executeText")]
    pub fn execute_text(
        &self,
        key: &str,
        primary: Vec<String>,
        target: Option<String>,
    ) -> Result<String, JsValue> {
        let primary = Sequence::Text(primary);
        let target = target.map(Value::Text);

        let outcome = self
            .engine
            .execute_key(key, &primary, None, target.as_ref())?;
        Ok(outcome.to_json()?)
    }

    /// Run a JSON array of invocations; each entry is an Outcome or an
    /// error string
    #[wasm_bindgen(js_name = "executeBatch")]
    pub fn execute_batch(&self, invocations_json: &str) -> Result<String, JsValue> {
        let invocations: Vec<Invocation> = serde_json::from_str(invocations_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid input: {}", e)))?;

        let results: Vec<Result<crate::sequence::Outcome, String>> = self
            .engine
            .execute_batch(&invocations)
            .into_iter()
            .map(|r| r.map_err(|e| e.to_string()))
            .collect();

        serde_json::to_string(&results)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Get engine version
    #[wasm_bindgen(js_name = "version")]
    pub fn version() -> String {
        crate::VERSION.to_string()
    }
}
