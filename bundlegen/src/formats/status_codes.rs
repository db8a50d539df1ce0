//! The optional status table, e.g. `statusCode.toml`:
//!
//! ```toml
//! [notfound]
//! status = 404
//! code = 10404
//! ```

use serde::{Deserialize, Serialize};

use crate::{error::Error, traits::Parser, types::StatusTable};

/// Decoded content of the status table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct StatusCodeFile {
    pub entries: StatusTable,
}

impl Parser for StatusCodeFile {
    fn from_str(s: &str) -> Result<Self, Error> {
        toml::from_str(s).map_err(|e| Error::decode("<input>", e.message()))
    }
}
