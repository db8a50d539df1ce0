//! Language fragment ingestion: reads every language file of a bundle
//! directory and regroups the messages identifier-first.

use std::{collections::BTreeMap, fs, path::Path};

use tracing::{debug, info};

use crate::{
    error::{Error, FatalErrorKind},
    formats::MessageFile,
    language::language_from_file_name,
    traits::Parser,
    types::{Identifier, LanguageCode, LanguageSet, MessageVariant},
};

/// One decoded language file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageFile {
    pub file_name: String,
    pub language: LanguageCode,
    pub content: MessageFile,
}

/// Everything the ingestor learned from the bundle directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ingested {
    /// identifier → language → trimmed message.
    pub fragments: BTreeMap<Identifier, BTreeMap<LanguageCode, MessageVariant>>,
    pub languages: LanguageSet,
}

/// Reads every language file in `dir`, in file-name order.
///
/// Directories, the status table (`status_file`) and files whose name
/// carries no language tag are skipped. Every other file must decode as a
/// message table, whatever its extension.
pub fn read_language_files(dir: &Path, status_file: &str) -> Result<Vec<LanguageFile>, Error> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Error::fatal(
            FatalErrorKind::Structural,
            format!("failed to read bundle directory `{}`: {}", dir.display(), e),
        )
        .with_file(dir.display().to_string())
    })?;

    let mut paths = entries
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if file_name == status_file {
            continue;
        }
        let Some(language) = language_from_file_name(file_name) else {
            debug!(file = file_name, "skipping file without a language tag");
            continue;
        };

        let content = MessageFile::read_from(&path).map_err(|e| match e {
            Error::Io(io) => Error::fatal(
                FatalErrorKind::Structural,
                format!("failed to read bundle file `{}`: {}", file_name, io),
            )
            .with_file(file_name),
            other => other,
        })?;
        debug!(
            file = file_name,
            language = %language,
            messages = content.messages.len(),
            "decoded bundle file"
        );

        files.push(LanguageFile {
            file_name: file_name.to_string(),
            language,
            content,
        });
    }

    Ok(files)
}

/// Folds decoded language files into identifier-first fragments.
///
/// Fails on an empty identifier, on a message whose slots are all blank, on
/// an identifier declared twice for one language, and when no file was
/// written in `default_language`.
pub fn ingest_files<I>(files: I, default_language: &LanguageCode) -> Result<Ingested, Error>
where
    I: IntoIterator<Item = LanguageFile>,
{
    let mut ingested = Ingested::default();

    for file in files {
        ingested.languages.insert(file.language.clone());

        for (id, variant) in file.content.messages {
            if id.is_empty() {
                return Err(Error::shape(format!(
                    "file `{}` declares an empty identifier",
                    file.file_name
                ))
                .with_language(file.language.as_str())
                .with_file(&file.file_name));
            }

            let variant = variant.trimmed();
            if variant.is_empty() {
                return Err(Error::shape(format!(
                    "identifier `{}` in file `{}` has no message content",
                    id, file.file_name
                ))
                .with_identifier(&id)
                .with_language(file.language.as_str())
                .with_file(&file.file_name));
            }

            let by_language = ingested.fragments.entry(id.clone()).or_default();
            if by_language.contains_key(&file.language) {
                return Err(Error::shape(format!(
                    "identifier `{}` is declared more than once for language `{}` (again in `{}`)",
                    id, file.language, file.file_name
                ))
                .with_identifier(&id)
                .with_language(file.language.as_str())
                .with_file(&file.file_name));
            }
            by_language.insert(file.language.clone(), variant);
        }
    }

    if !ingested.languages.contains(default_language) {
        return Err(Error::completeness(format!(
            "default language `{}` has no bundle file",
            default_language
        ))
        .with_language(default_language.as_str()));
    }

    info!(
        languages = ingested.languages.len(),
        identifiers = ingested.fragments.len(),
        "ingested bundle files"
    );

    Ok(ingested)
}

/// Reads and ingests a bundle directory in one step.
pub fn ingest_dir(
    dir: &Path,
    status_file: &str,
    default_language: &LanguageCode,
) -> Result<Ingested, Error> {
    let files = read_language_files(dir, status_file)?;
    ingest_files(files, default_language)
}
