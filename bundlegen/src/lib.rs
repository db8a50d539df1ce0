#![forbid(unsafe_code)]
//! Message bundle consolidation for Rust.
//!
//! Reads a directory of per-language TOML files (`messages.en.toml`,
//! `messages.zh-CN.toml`, ...) plus an optional status table, merges them into
//! one record per identifier, and refuses the whole bundle unless every
//! identifier is complete and well-formed in every language.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use bundlegen::{Engine, GenerateOptions};
//!
//! let engine = Engine::new(
//!     GenerateOptions::new()
//!         .with_bundle_dir("bundle")
//!         .with_default_language("en")
//!         .with_output_dir("src/generated"),
//! )?;
//!
//! // Validate only
//! let bundle = engine.run()?;
//! println!("{} messages in {} languages", bundle.records.len(), bundle.languages.len());
//!
//! // Or validate and write `src/generated/i18n.rs`
//! engine.generate()?;
//! # Ok::<(), bundlegen::Error>(())
//! ```
//!
//! # Pipeline
//!
//! 1. [`ingest`]: decode every language file, regroup identifier-first.
//! 2. [`status`]: load the optional status table.
//! 3. [`merge`]: build one [`BundleRecord`] per identifier.
//! 4. [`validate`]: every variant kind in use must be used by every language.
//! 5. [`reconcile`]: no orphan status keys, all-or-nothing status/code.
//!
//! Any violation aborts the run with an [`Error`]; no partial bundle is ever
//! produced.

pub mod emit;
pub mod engine;
pub mod error;
pub mod formats;
pub mod ingest;
pub mod language;
pub mod merge;
pub mod reconcile;
pub mod status;
pub mod traits;
pub mod types;
pub mod validate;

// Re-export most used types for easy consumption
pub use crate::{
    emit::{RustEmitter, write_bundle},
    engine::{Engine, GenerateOptions, consolidate},
    error::{Error, FatalErrorKind},
    language::canonicalize_tag,
    types::{
        Bundle, BundleRecord, Identifier, LanguageCode, LanguageSet, MessageVariant,
        StatusCodeEntry, StatusTable, VariantKind,
    },
};
