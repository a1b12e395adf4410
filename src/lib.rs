//! jauge: json payload gauge that weighs your payloads and tells you what broke
//!
//! ```ignore
//! use jauge::evaluate;
//!
//! let snapshot = evaluate(r#"{"name": "Alice", "age": 30}"#);
//! assert!(snapshot.validation.valid);
//! println!("{} bytes over the wire", snapshot.metrics.byte_count);
//! ```

pub mod diagnose;
pub mod inspector;
pub mod metrics;
pub mod pretty;

pub use diagnose::SyntaxError;
pub use inspector::{check, evaluate, validate, Evaluation, ValidationResult};
pub use metrics::{measure, Metrics, SizeTier};
pub use pretty::format;
