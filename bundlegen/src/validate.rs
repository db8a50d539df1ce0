//! Cross-language validation of merged records.

use std::collections::BTreeSet;

use crate::{
    error::Error,
    merge::Merged,
    types::{LanguageCode, LanguageSet, VariantKind},
};

/// Checks that each variant kind an identifier uses is provided in every
/// language of the bundle.
///
/// A kind no language uses is fine. A kind some languages use and others
/// don't is fatal: the error lists which languages have it and which lack it.
pub fn validate(merged: &Merged) -> Result<(), Error> {
    for (id, presence) in &merged.presence {
        for kind in VariantKind::ALL {
            check_uniform(id, kind, &merged.languages, presence.get(kind))?;
        }
    }
    Ok(())
}

fn check_uniform(
    id: &str,
    kind: VariantKind,
    languages: &LanguageSet,
    present: &BTreeSet<LanguageCode>,
) -> Result<(), Error> {
    if present.is_empty() {
        return Ok(());
    }

    let (have, missing): (Vec<&LanguageCode>, Vec<&LanguageCode>) =
        languages.iter().partition(|l| present.contains(*l));
    let Some(first_missing) = missing.first() else {
        return Ok(());
    };

    Err(Error::completeness(format!(
        "the `{}` messages of identifier `{}` are not uniform across languages: \
         set in `{}` but not in `{}`",
        kind,
        id,
        join(&have),
        join(&missing)
    ))
    .with_identifier(id)
    .with_language(first_missing.as_str()))
}

fn join(languages: &[&LanguageCode]) -> String {
    languages
        .iter()
        .map(|l| l.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
