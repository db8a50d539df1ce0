//! Per-language message files such as `messages.en.toml`:
//!
//! ```toml
//! [hello]
//! msg = "Hello"
//!
//! [apples]
//! singular = "one apple"
//! plural = "{count} apples"
//! ```

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser, types::PerLanguageFragment};

/// Decoded content of one language file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MessageFile {
    pub messages: PerLanguageFragment,
}

impl Parser for MessageFile {
    fn from_str(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(|e| Error::decode("<input>", e.message()))
    }
}
