//! File formats read from a bundle directory.
//!
//! Both formats are TOML tables keyed by identifier:
//! - [`messages`]: one file per language, identifier → `msg` / `singular` / `plural`.
//! - [`status_codes`]: the optional status table, identifier → `status` / `code`.

pub mod messages;
pub mod status_codes;

// Reexporting the formats for easier access
pub use messages::MessageFile;
pub use status_codes::StatusCodeFile;
