//! # Divide-and-Conquer Engine
//!
//! Classical divide-and-conquer array algorithms behind one invocation
//! contract. Every call returns an [`Outcome`]: the computed result, the
//! caller's input as given, and an explanation of what was done.
//!
//! ## Algorithms
//!
//! ```text
//! sorting     mergeSort, quickSort, heapSort
//! searching   binarySearch, searchRotated
//! aggregate   majorityElement, medianSorted, maxSubarray, countInversions
//! ```
//!
//! The drivers in [`sorting`], [`searching`] and [`aggregate`] are also
//! usable directly, with typed results.
//!
//! ## Features
//!
//! - `std` (default): Standard library support
//! - `wasm`: WebAssembly bindings via wasm-bindgen
//!
//! ## Example
//!
//! ```rust
//! use dnc_engine::{AlgorithmId, Engine, OutcomeValue, Sequence, Value};
//!
//! let engine = Engine::new();
//!
//! let input = Sequence::from(vec![5.0, 3.0, 1.0, 4.0, 2.0]);
//! let outcome = engine
//!     .execute(AlgorithmId::BinarySearch, &input, None, Some(&Value::Number(4.0)))
//!     .unwrap();
//!
//! assert_eq!(outcome.result, OutcomeValue::Position(Some(3)));
//! println!("{}", outcome.explanation);
//! ```
//!
//! Author: Ryan J Cardwell (Archer Phoenix)

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod primitives;
pub mod registry;
pub mod searching;
pub mod sequence;
pub mod sorting;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports
pub use engine::*;
pub use error::*;
pub use registry::{AlgorithmDescriptor, AlgorithmId, ComplexityProfile};
pub use sequence::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the engine (call once, especially important for WASM)
#[cfg(feature = "wasm")]
pub fn init() {
    console_error_panic_hook::set_once();
}
