//! CLI library for testing purposes

pub mod check;
pub mod generate;
pub mod logging;
pub mod options;
pub mod validation;

pub use options::BundleArgs;
