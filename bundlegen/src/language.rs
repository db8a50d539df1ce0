//! Language tag canonicalization and file-name language detection.

use unic_langid::LanguageIdentifier;

use crate::types::LanguageCode;

/// Extension of the status table file.
pub const BUNDLE_FILE_EXTENSION: &str = "toml";

/// Parses `name` as a BCP 47 language tag and returns its canonical,
/// lower-cased form.
///
/// `_` is accepted as a subtag separator, so `zh_CN`, `zh-cn` and `ZH-CN`
/// all map to `zh-cn`. Only ISO 639 primary subtags (two or three letters)
/// are accepted; `und` and anything that fails to parse yield `None`.
///
/// ```rust
/// use bundlegen::language::canonicalize_tag;
/// assert_eq!(canonicalize_tag("zh_CN").unwrap().as_str(), "zh-cn");
/// assert!(canonicalize_tag("statusCode").is_none());
/// ```
pub fn canonicalize_tag(name: &str) -> Option<LanguageCode> {
    let normalized = name.trim().replace('_', "-");
    if normalized.is_empty() {
        return None;
    }

    let lang_id = normalized.parse::<LanguageIdentifier>().ok()?;
    let primary = lang_id.language.as_str();
    if primary == "und" || !(2..=3).contains(&primary.len()) {
        return None;
    }

    Some(LanguageCode::from_canonical(
        lang_id.to_string().to_ascii_lowercase(),
    ))
}

/// Derives the language of a bundle file from its name.
///
/// The tag is the dot-separated segment right before the last dot, whatever
/// the extension: `messages.zh-CN.toml` and `zh-CN.toml` both yield `zh-cn`,
/// `messages.fr.yaml` yields `fr`. Names without a dot, or whose segment is
/// not a language tag, yield `None`.
pub fn language_from_file_name(file_name: &str) -> Option<LanguageCode> {
    let mut segments = file_name.rsplit('.');
    segments.next()?;
    let tag = segments.next()?;
    canonicalize_tag(tag)
}
