//! Traits at the decode and emit boundaries of the engine.

use std::{
    fs::File,
    io::{BufRead, Read, Write},
    path::Path,
};

use crate::{error::Error, types::Bundle};

/// A trait for decoding one bundle-directory file.
///
/// # Example
///
/// ```rust,no_run
/// use bundlegen::traits::Parser;
/// let file = bundlegen::formats::MessageFile::read_from("bundle/messages.en.toml")?;
/// println!("{} messages", file.messages.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from any reader.
    fn from_reader<R: BufRead>(mut reader: R) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_str(&content)
    }

    /// Parse from file path.
    ///
    /// The file is decoded BOM-aware, so UTF-16 files with a byte-order mark
    /// read the same as UTF-8 ones. Decode errors name the file.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let path = path.as_ref();
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .strip_bom(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded).map_err(|e| match e {
            Error::Decode { message, .. } => Error::decode(path.display().to_string(), message),
            other => other,
        })
    }
}

/// A trait for rendering a validated [`Bundle`] into generated source text.
pub trait Emitter {
    /// File extension of the generated file, without the dot.
    fn extension(&self) -> &'static str;

    /// Write the generated source for `bundle` to any writer.
    fn emit<W: Write>(&self, bundle: &Bundle, writer: W) -> Result<(), Error>;
}
