//! Insights Crate
//!
//! This crate turns the loosely-shaped analysis payload returned by the AI
//! provider into display-safe insight records. The payload is untrusted:
//! it may not be valid JSON, fields may be missing, and list fields may
//! arrive as bare strings. Everything here is total, so no input can make
//! these functions fail or panic.
//!
//! # Architecture
//!
//! - **Types**: `NormalizedAnalysis`, `Insight` and the enums live in the
//!   `shared-types` crate
//! - **Pipeline**: `decode`, then `normalize`, then `assemble`, implemented here
//!
//! # Example
//!
//! ```rust
//! use insights::{assemble, decode, normalize};
//!
//! let raw = r#"{"OverallSentiment":"positive","KeyConcernsOrObjectionsRaised":"pricing"}"#;
//! let analysis = normalize(&decode(raw));
//! let insight = assemble(analysis, "Call went well".to_string(), 1);
//! assert_eq!(insight.analysis.key_concerns, vec!["pricing".to_string()]);
//! ```

pub mod assemble;
pub mod decode;
pub mod normalize;

pub use assemble::assemble;
pub use decode::{decode, CandidateAnalysis, DecodeFailure};
pub use normalize::normalize;
