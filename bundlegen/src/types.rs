//! Core types shared by every stage of the engine.
//! Decoders produce [`MessageVariant`]s and [`StatusCodeEntry`]s; the engine
//! turns them into [`BundleRecord`]s and finally a [`Bundle`].

use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use serde::{Deserialize, Serialize};

/// Key of a translatable message, unique across the whole bundle.
pub type Identifier = String;

/// Canonical, lower-cased language tag such as `en` or `zh-cn`.
///
/// Only [`crate::language::canonicalize_tag`] creates these, so two codes
/// compare equal exactly when they name the same language.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    pub(crate) fn from_canonical(code: String) -> Self {
        LanguageCode(code)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LanguageCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every language observed while ingesting the bundle directory.
pub type LanguageSet = BTreeSet<LanguageCode>;

/// The three text slots one identifier may carry in one language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageVariant {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub msg: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub plural: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub singular: String,
}

impl MessageVariant {
    /// Returns the variant with surrounding whitespace removed from every slot.
    pub fn trimmed(&self) -> Self {
        MessageVariant {
            msg: self.msg.trim().to_string(),
            plural: self.plural.trim().to_string(),
            singular: self.singular.trim().to_string(),
        }
    }

    /// True when no slot carries text.
    pub fn is_empty(&self) -> bool {
        self.msg.is_empty() && self.plural.is_empty() && self.singular.is_empty()
    }

    /// True when `singular` and `plural` are both set or both unset.
    pub fn is_paired(&self) -> bool {
        self.singular.is_empty() == self.plural.is_empty()
    }

    pub fn get(&self, kind: VariantKind) -> &str {
        match kind {
            VariantKind::Msg => &self.msg,
            VariantKind::Plural => &self.plural,
            VariantKind::Singular => &self.singular,
        }
    }
}

/// Names one of the three slots of a [`MessageVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Msg,
    Plural,
    Singular,
}

impl VariantKind {
    /// All kinds, in the order the validator checks them.
    pub const ALL: [VariantKind; 3] = [
        VariantKind::Msg,
        VariantKind::Plural,
        VariantKind::Singular,
    ];
}

impl Display for VariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VariantKind::Msg => write!(f, "Msg"),
            VariantKind::Plural => write!(f, "Plural"),
            VariantKind::Singular => write!(f, "Singular"),
        }
    }
}

/// All messages one file declares for its language.
pub type PerLanguageFragment = BTreeMap<Identifier, MessageVariant>;

/// Optional status/code metadata for one identifier.
///
/// Values that are zero or negative count as unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StatusCodeEntry {
    #[serde(default)]
    pub status: i64,

    #[serde(default)]
    pub code: i64,
}

impl StatusCodeEntry {
    pub fn status(&self) -> Option<i64> {
        (self.status > 0).then_some(self.status)
    }

    pub fn code(&self) -> Option<i64> {
        (self.code > 0).then_some(self.code)
    }
}

/// Identifier → status/code metadata, as decoded from the status table file.
pub type StatusTable = BTreeMap<Identifier, StatusCodeEntry>;

/// Merged and validated content of one identifier across all languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BundleRecord {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub msg: BTreeMap<LanguageCode, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub singular: BTreeMap<LanguageCode, String>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub plural: BTreeMap<LanguageCode, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
}

impl BundleRecord {
    pub fn texts(&self, kind: VariantKind) -> &BTreeMap<LanguageCode, String> {
        match kind {
            VariantKind::Msg => &self.msg,
            VariantKind::Plural => &self.plural,
            VariantKind::Singular => &self.singular,
        }
    }

    pub(crate) fn texts_mut(&mut self, kind: VariantKind) -> &mut BTreeMap<LanguageCode, String> {
        match kind {
            VariantKind::Msg => &mut self.msg,
            VariantKind::Plural => &mut self.plural,
            VariantKind::Singular => &mut self.singular,
        }
    }
}

/// Languages that provided each kind of variant for one identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantPresence {
    msg: BTreeSet<LanguageCode>,
    plural: BTreeSet<LanguageCode>,
    singular: BTreeSet<LanguageCode>,
}

impl VariantPresence {
    pub fn get(&self, kind: VariantKind) -> &BTreeSet<LanguageCode> {
        match kind {
            VariantKind::Msg => &self.msg,
            VariantKind::Plural => &self.plural,
            VariantKind::Singular => &self.singular,
        }
    }

    pub(crate) fn insert(&mut self, kind: VariantKind, language: LanguageCode) {
        match kind {
            VariantKind::Msg => self.msg.insert(language),
            VariantKind::Plural => self.plural.insert(language),
            VariantKind::Singular => self.singular.insert(language),
        };
    }
}

/// The validated output of one engine run, ready for code emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    pub default_language: LanguageCode,
    pub languages: LanguageSet,
    /// Whether every record carries a status.
    pub has_status: bool,
    /// Whether every record carries a code.
    pub has_code: bool,
    pub records: BTreeMap<Identifier, BundleRecord>,
}
