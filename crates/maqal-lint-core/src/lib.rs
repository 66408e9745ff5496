//! Core library for maqal-lint.
//!
//! A deterministic, rule-based quality analyzer for generated Arabic
//! restaurant-guide prose. One call takes the article text and returns a
//! [`QualityReport`] with structural statistics, lexicon-based ratios,
//! boilerplate and repetition flags, authority signals, a composite
//! human-style score, and improvement tips.
//!
//! # Modules
//!
//! - [`analysis`] - The analysis pipeline and report types
//! - [`lexicon`] - Injectable term tables (Arabic defaults built in)
//! - [`text`] - Paragraph/sentence/token segmentation
//! - [`config`] - Configuration loading and discovery
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use maqal_lint_core::quality_report;
//!
//! let report = quality_report("زرنا المطعم مساء الخميس. القوام مقرمش والخدمة سريعة.");
//! assert!(report.human_style_score >= 0.0 && report.human_style_score <= 100.0);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod text;

pub use analysis::{QualityReport, analyze, quality_report};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{ConfigError, ConfigResult, LexiconError, LexiconResult};
pub use lexicon::Lexicon;

/// Default maximum input size in bytes (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
