//! Rendering of a validated [`Bundle`] into a Rust source module.

use std::{
    collections::BTreeMap,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use indoc::indoc;

use crate::{
    error::Error,
    traits::Emitter,
    types::{Bundle, LanguageCode},
};

/// Emits a self-contained Rust module holding the bundle as static tables.
///
/// The generated `MESSAGES` slice is sorted by identifier, which lets the
/// generated `message(id)` binary-search it. `status` and `code` fields are
/// only generated when the whole bundle carries them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustEmitter;

impl Emitter for RustEmitter {
    fn extension(&self) -> &'static str {
        "rs"
    }

    fn emit<W: Write>(&self, bundle: &Bundle, mut writer: W) -> Result<(), Error> {
        let mut content = String::new();

        content.push_str(indoc! {"
            // This file is automatically generated by bundlegen.
            // Do not edit it manually, as your changes will be overwritten
            // the next time the bundle is generated.

            #![allow(dead_code)]

        "});

        content.push_str(&format!(
            "/// Language every message is guaranteed to be defined in.\n\
             pub const DEFAULT_LANGUAGE: &str = {};\n\n",
            literal(bundle.default_language.as_str())
        ));

        let languages = bundle
            .languages
            .iter()
            .map(|l| literal(l.as_str()))
            .collect::<Vec<_>>()
            .join(", ");
        content.push_str(&format!(
            "/// Every language of the bundle.\n\
             pub const LANGUAGES: &[&str] = &[{}];\n\n",
            languages
        ));

        content.push_str(indoc! {"
            /// One message in every language of the bundle.
            ///
            /// Each text table is a list of `(language, text)` pairs sorted by
            /// language; a table is empty when the message does not use that form.
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub struct Message {
                pub id: &'static str,
                pub msg: &'static [(&'static str, &'static str)],
                pub singular: &'static [(&'static str, &'static str)],
                pub plural: &'static [(&'static str, &'static str)],
        "});
        if bundle.has_status {
            content.push_str("    pub status: i64,\n");
        }
        if bundle.has_code {
            content.push_str("    pub code: i64,\n");
        }
        content.push_str("}\n\n");

        content.push_str("/// All messages, sorted by identifier.\n");
        content.push_str("pub static MESSAGES: &[Message] = &[\n");
        for (id, record) in &bundle.records {
            content.push_str("    Message {\n");
            content.push_str(&format!("        id: {},\n", literal(id)));
            content.push_str(&format!("        msg: {},\n", text_table(&record.msg)));
            content.push_str(&format!(
                "        singular: {},\n",
                text_table(&record.singular)
            ));
            content.push_str(&format!("        plural: {},\n", text_table(&record.plural)));
            if bundle.has_status {
                let status = record.status.ok_or_else(|| {
                    Error::completeness(format!("identifier `{}` has no status", id))
                        .with_identifier(id)
                })?;
                content.push_str(&format!("        status: {},\n", status));
            }
            if bundle.has_code {
                let code = record.code.ok_or_else(|| {
                    Error::completeness(format!("identifier `{}` has no code", id))
                        .with_identifier(id)
                })?;
                content.push_str(&format!("        code: {},\n", code));
            }
            content.push_str("    },\n");
        }
        content.push_str("];\n\n");

        content.push_str(indoc! {"
            /// Looks up the message registered under `id`.
            pub fn message(id: &str) -> Option<&'static Message> {
                MESSAGES
                    .binary_search_by(|message| message.id.cmp(id))
                    .ok()
                    .map(|index| &MESSAGES[index])
            }
        "});

        writer.write_all(content.as_bytes()).map_err(Error::Io)?;
        writer.flush().map_err(Error::Io)
    }
}

/// Writes `bundle` through `emitter` to `<output_dir>/<module_name>.<ext>`,
/// creating `output_dir` when needed. Returns the written path.
pub fn write_bundle<E: Emitter>(
    emitter: &E,
    bundle: &Bundle,
    output_dir: &Path,
    module_name: &str,
) -> Result<PathBuf, Error> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}.{}", module_name, emitter.extension()));
    let file = File::create(&path)?;
    emitter.emit(bundle, BufWriter::new(file))?;
    Ok(path)
}

// Debug formatting of `str` yields a valid Rust string literal.
fn literal(s: &str) -> String {
    format!("{:?}", s)
}

fn text_table(texts: &BTreeMap<LanguageCode, String>) -> String {
    if texts.is_empty() {
        return "&[]".to_string();
    }
    let pairs = texts
        .iter()
        .map(|(language, text)| format!("({}, {})", literal(language.as_str()), literal(text)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("&[{}]", pairs)
}
