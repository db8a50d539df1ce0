//! The consolidation engine: runs ingest, merge, validation and status
//! reconciliation in order and returns a [`Bundle`] or the first fatal error.
//!
//! ```rust,no_run
//! use bundlegen::{Engine, GenerateOptions};
//!
//! let engine = Engine::new(
//!     GenerateOptions::new()
//!         .with_bundle_dir("bundle")
//!         .with_default_language("en"),
//! )?;
//! let path = engine.generate()?;
//! println!("wrote {}", path.display());
//! # Ok::<(), bundlegen::Error>(())
//! ```

use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

use crate::{
    emit::{RustEmitter, write_bundle},
    error::Error,
    ingest::ingest_dir,
    language::{BUNDLE_FILE_EXTENSION, canonicalize_tag},
    merge::merge,
    reconcile::reconcile,
    status::load_status_table,
    types::{Bundle, LanguageCode},
    validate::validate,
};

lazy_static! {
    static ref FILE_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z0-9_\-.]+$").unwrap();
    static ref MODULE_NAME_REGEX: Regex = Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*$").unwrap();
}

pub const DEFAULT_BUNDLE_DIR: &str = "bundle";
pub const DEFAULT_STATUS_FILE: &str = "statusCode";
pub const DEFAULT_MODULE_NAME: &str = "i18n";
pub const DEFAULT_OUTPUT_DIR: &str = "i18n";
pub const DEFAULT_LANGUAGE: &str = "zh_cn";

/// Configuration of one engine run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory holding the per-language files and the status table.
    pub bundle_dir: PathBuf,
    /// Status table file name inside `bundle_dir`; `.toml` is appended when missing.
    pub status_file: String,
    /// Name of the generated module (and file stem).
    pub module_name: String,
    /// Directory the generated module is written to.
    pub output_dir: PathBuf,
    /// Language every identifier must be defined in.
    pub default_language: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            bundle_dir: PathBuf::from(DEFAULT_BUNDLE_DIR),
            status_file: DEFAULT_STATUS_FILE.to_string(),
            module_name: DEFAULT_MODULE_NAME.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            default_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl GenerateOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bundle_dir(mut self, bundle_dir: impl Into<PathBuf>) -> Self {
        self.bundle_dir = bundle_dir.into();
        self
    }

    pub fn with_status_file(mut self, status_file: impl Into<String>) -> Self {
        self.status_file = status_file.into();
        self
    }

    pub fn with_module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = module_name.into();
        self
    }

    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    pub fn with_default_language(mut self, default_language: impl Into<String>) -> Self {
        self.default_language = default_language.into();
        self
    }

    /// Checks the options before any file is read.
    ///
    /// The bundle directory must exist and be a directory, the status file
    /// name may only contain `[a-zA-Z0-9_-.]`, the module name must be a
    /// valid identifier and the default language a parseable language tag.
    pub fn validate(&self) -> Result<(), Error> {
        if !self.bundle_dir.is_dir() {
            let reason = if self.bundle_dir.exists() {
                "is not a directory"
            } else {
                "does not exist"
            };
            return Err(Error::InvalidOptions(format!(
                "bundle directory `{}` {}",
                self.bundle_dir.display(),
                reason
            )));
        }

        if !FILE_NAME_REGEX.is_match(&self.status_file) {
            return Err(Error::InvalidOptions(format!(
                "invalid status file name `{}`",
                self.status_file
            )));
        }

        if !MODULE_NAME_REGEX.is_match(&self.module_name) {
            return Err(Error::InvalidOptions(format!(
                "invalid module name `{}`",
                self.module_name
            )));
        }

        if canonicalize_tag(&self.default_language).is_none() {
            return Err(Error::InvalidOptions(format!(
                "invalid default language `{}`",
                self.default_language
            )));
        }

        Ok(())
    }
}

/// A configured, validated engine.
#[derive(Debug, Clone)]
pub struct Engine {
    bundle_dir: PathBuf,
    status_file: String,
    module_name: String,
    output_dir: PathBuf,
    default_language: LanguageCode,
}

impl Engine {
    /// Validates `options` and builds an engine from them.
    ///
    /// See [`GenerateOptions::validate`]. The status file name gets a `.toml`
    /// suffix when it has none, and the default language is canonicalized.
    pub fn new(options: GenerateOptions) -> Result<Self, Error> {
        options.validate()?;

        let suffix = format!(".{}", BUNDLE_FILE_EXTENSION);
        let status_file = if options.status_file.ends_with(&suffix) {
            options.status_file
        } else {
            options.status_file + &suffix
        };

        let default_language = canonicalize_tag(&options.default_language).ok_or_else(|| {
            Error::InvalidOptions(format!(
                "invalid default language `{}`",
                options.default_language
            ))
        })?;

        Ok(Self {
            bundle_dir: options.bundle_dir,
            status_file,
            module_name: options.module_name,
            output_dir: options.output_dir,
            default_language,
        })
    }

    pub fn bundle_dir(&self) -> &Path {
        &self.bundle_dir
    }

    pub fn status_file(&self) -> &str {
        &self.status_file
    }

    pub fn default_language(&self) -> &LanguageCode {
        &self.default_language
    }

    /// Runs every stage and returns the validated bundle.
    pub fn run(&self) -> Result<Bundle, Error> {
        consolidate(&self.bundle_dir, &self.status_file, &self.default_language)
    }

    /// Runs the engine and writes the generated Rust module; returns its path.
    pub fn generate(&self) -> Result<PathBuf, Error> {
        let bundle = self.run()?;
        let path = write_bundle(&RustEmitter, &bundle, &self.output_dir, &self.module_name)?;
        info!(path = %path.display(), "generated bundle module");
        Ok(path)
    }
}

/// Consolidates the bundle directory `dir` into a validated [`Bundle`].
pub fn consolidate(
    dir: &Path,
    status_file: &str,
    default_language: &LanguageCode,
) -> Result<Bundle, Error> {
    let ingested = ingest_dir(dir, status_file, default_language)?;
    let status_table = load_status_table(dir, status_file);

    let merged = merge(&ingested, status_table.as_ref())?;
    validate(&merged)?;
    let coverage = reconcile(&merged.records, status_table.as_ref())?;

    info!(
        identifiers = merged.records.len(),
        languages = merged.languages.len(),
        has_status = coverage.has_status,
        has_code = coverage.has_code,
        "bundle validated"
    );

    Ok(Bundle {
        default_language: default_language.clone(),
        languages: merged.languages,
        has_status: coverage.has_status,
        has_code: coverage.has_code,
        records: merged.records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FatalErrorKind;

    fn options() -> GenerateOptions {
        GenerateOptions::new().with_bundle_dir(env!("CARGO_MANIFEST_DIR"))
    }

    #[test]
    fn test_default_options() {
        let options = GenerateOptions::new();
        assert_eq!(options.bundle_dir, PathBuf::from("bundle"));
        assert_eq!(options.status_file, "statusCode");
        assert_eq!(options.module_name, "i18n");
        assert_eq!(options.output_dir, PathBuf::from("i18n"));
        assert_eq!(options.default_language, "zh_cn");
    }

    #[test]
    fn test_engine_normalizes_options() {
        let engine = Engine::new(options()).unwrap();
        assert_eq!(engine.status_file(), "statusCode.toml");
        assert_eq!(engine.default_language().as_str(), "zh-cn");

        let engine = Engine::new(options().with_status_file("codes.toml")).unwrap();
        assert_eq!(engine.status_file(), "codes.toml");
    }

    #[test]
    fn test_engine_rejects_missing_bundle_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("definitely-not-here");

        let err = Engine::new(GenerateOptions::new().with_bundle_dir(&missing)).unwrap_err();
        assert!(matches!(err, Error::InvalidOptions(_)));
        assert_eq!(err.kind(), FatalErrorKind::Structural);
        assert!(err.to_string().contains("does not exist"), "{}", err);
    }

    #[test]
    fn test_engine_rejects_file_as_bundle_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("a.en.toml");
        std::fs::write(&file, "").unwrap();

        let err = GenerateOptions::new()
            .with_bundle_dir(&file)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("is not a directory"), "{}", err);
    }

    #[test]
    fn test_engine_rejects_bad_status_file_name() {
        for name in ["../escape", "a b", "", "codes/x.toml"] {
            let err = Engine::new(options().with_status_file(name)).unwrap_err();
            assert!(matches!(err, Error::InvalidOptions(_)), "name {:?}", name);
        }
    }

    #[test]
    fn test_engine_rejects_bad_module_name() {
        for name in ["1abc", "my-module", "", "a.b"] {
            let err = Engine::new(options().with_module_name(name)).unwrap_err();
            assert_eq!(err.kind(), FatalErrorKind::Structural, "name {:?}", name);
        }
        assert!(Engine::new(options().with_module_name("_messages2")).is_ok());
    }

    #[test]
    fn test_engine_rejects_bad_default_language() {
        let err = Engine::new(options().with_default_language("xx-invalid-")).unwrap_err();
        assert!(err.to_string().contains("default language"));
    }
}
