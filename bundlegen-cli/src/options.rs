use bundlegen::GenerateOptions;
use bundlegen::engine::{DEFAULT_BUNDLE_DIR, DEFAULT_LANGUAGE, DEFAULT_STATUS_FILE};
use clap::Args;

/// Flags locating and describing the bundle, shared by every command.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct BundleArgs {
    /// Directory holding the per-language TOML files
    #[arg(long, env = "BUNDLEGEN_BUNDLE_DIR", default_value = DEFAULT_BUNDLE_DIR)]
    pub bundle_dir: String,

    /// Status/code table file name inside the bundle directory (`.toml` is appended when missing)
    #[arg(long, env = "BUNDLEGEN_STATUS_FILE", default_value = DEFAULT_STATUS_FILE)]
    pub status_file: String,

    /// Language every message must be defined in
    #[arg(long, env = "BUNDLEGEN_DEFAULT_LANGUAGE", default_value = DEFAULT_LANGUAGE)]
    pub default_language: String,
}

impl BundleArgs {
    pub fn to_generate_options(&self) -> GenerateOptions {
        GenerateOptions::new()
            .with_bundle_dir(&self.bundle_dir)
            .with_status_file(&self.status_file)
            .with_default_language(&self.default_language)
    }
}
