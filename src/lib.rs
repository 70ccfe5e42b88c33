//! # Textdup-RS: Weighted Text Duplication Scoring
//!
//! Measures how much of a reference document reappears in a candidate
//! document. Four independent similarity metrics are computed over the two
//! token sequences:
//!
//! - **LCS ratio**: longest common subsequence length over reference length
//! - **Edit similarity**: one minus token-level Levenshtein distance over the
//!   longer length
//! - **N-gram Jaccard**: overlap of contiguous token windows
//! - **SimHash similarity**: agreement of locality-sensitive fingerprints
//!
//! Each is normalized into `[0, 1]` and combined by a weight profile into a
//! percentage.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        API Layer                          │
//! ├───────────────────────────────────────────────────────────┤
//! │  Core          │  Detectors      │  Text      │  I/O      │
//! │ • Scoring      │ • N-grams       │ • Tokenizer│ • Docs    │
//! │ • Config       │ • Alignment     │            │ • Scores  │
//! │ • Errors       │ • Overlap       │            │           │
//! │                │ • SimHash       │            │           │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textdup_rs::{DuplicationScorer, SimilarityConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scorer = DuplicationScorer::new(SimilarityConfig::default())?;
//!     let report = scorer.score(&["我", "喜欢", "编程"], &["我", "喜欢", "编程"])?;
//!
//!     println!("Duplication rate: {:.2} %", report.final_score);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Memory allocator selection (mutually exclusive)
#[cfg(all(feature = "mimalloc", not(feature = "jemalloc")))]
#[global_allocator]
static ALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[cfg(all(feature = "jemalloc", not(feature = "mimalloc")))]
#[global_allocator]
static ALLOC: jemallocator::Jemalloc = jemallocator::Jemalloc;

// Core scoring engine modules
pub mod core {
    //! Core scoring, configuration and error types.

    pub mod config;
    pub mod errors;
    pub mod scoring;
}

// Similarity algorithms
pub mod detectors {
    //! Individual similarity algorithms over token sequences.

    pub mod alignment;
    pub mod ngram;
    pub mod overlap;
    pub mod simhash;
}

// Tokenization
pub mod text {
    //! Text to token-sequence conversion.

    pub mod tokenizer;
}

// Document and result I/O
pub mod io {
    //! Document reading and score persistence.

    pub mod documents;
}

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
}

// Re-export primary types for convenience
pub use crate::api::engine::DuplicationEngine;
pub use crate::core::config::{SimilarityConfig, SimilarityWeights, TextdupConfig, TokenizerConfig};
pub use crate::core::errors::{InputRole, Result, TextdupError};
pub use crate::core::scoring::{DuplicationReport, DuplicationScorer, Metric, SimilarityRecord};
pub use crate::detectors::simhash::Fingerprint;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
