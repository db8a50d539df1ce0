//! Bundle merging: one [`BundleRecord`] per identifier, plus the presence
//! sets the cross-language validator consumes.

use std::collections::BTreeMap;

use tracing::info;

use crate::{
    error::Error,
    ingest::Ingested,
    types::{BundleRecord, Identifier, LanguageSet, StatusTable, VariantKind, VariantPresence},
};

/// Output of the merge stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Merged {
    pub records: BTreeMap<Identifier, BundleRecord>,
    pub presence: BTreeMap<Identifier, VariantPresence>,
    pub languages: LanguageSet,
}

/// Merges ingested fragments into per-identifier records.
///
/// Identifiers are visited in sorted order and the first violation aborts:
/// an identifier absent from a present status table, a language of the
/// bundle without a message for the identifier, or a `singular` without its
/// `plural` (or the reverse).
pub fn merge(ingested: &Ingested, status_table: Option<&StatusTable>) -> Result<Merged, Error> {
    let mut merged = Merged {
        languages: ingested.languages.clone(),
        ..Default::default()
    };

    for (id, by_language) in &ingested.fragments {
        let mut record = BundleRecord::default();
        let mut presence = VariantPresence::default();

        if let Some(table) = status_table {
            let entry = table.get(id).ok_or_else(|| {
                Error::completeness(format!(
                    "identifier `{}` declares message content but has no status table entry",
                    id
                ))
                .with_identifier(id)
            })?;
            record.status = entry.status();
            record.code = entry.code();
        }

        for language in &ingested.languages {
            let variant = by_language.get(language).ok_or_else(|| {
                Error::completeness(format!(
                    "message missing for language `{}` under identifier `{}`",
                    language, id
                ))
                .with_identifier(id)
                .with_language(language.as_str())
            })?;

            for kind in VariantKind::ALL {
                let text = variant.get(kind);
                if !text.is_empty() {
                    presence.insert(kind, language.clone());
                    record.texts_mut(kind).insert(language.clone(), text.to_string());
                }
            }

            if !variant.is_paired() {
                return Err(Error::shape(format!(
                    "`singular` and `plural` must be set together under identifier `{}` \
                     for language `{}`; use `msg` for a message without plural forms",
                    id, language
                ))
                .with_identifier(id)
                .with_language(language.as_str()));
            }
        }

        merged.records.insert(id.clone(), record);
        merged.presence.insert(id.clone(), presence);
    }

    info!(records = merged.records.len(), "merged bundle records");
    Ok(merged)
}
