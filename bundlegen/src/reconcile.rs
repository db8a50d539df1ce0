//! Status/code reconciliation between the status table and merged records.

use std::collections::BTreeMap;

use crate::{
    error::Error,
    types::{BundleRecord, Identifier, StatusTable},
};

/// Which kinds of status metadata the whole bundle carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCoverage {
    pub has_status: bool,
    pub has_code: bool,
}

/// Reconciles the status table with the merged records.
///
/// Without a table nothing is checked. With one, every table key must name a
/// merged identifier, and status (and independently code) must be set on
/// every record as soon as it is set on any.
pub fn reconcile(
    records: &BTreeMap<Identifier, BundleRecord>,
    status_table: Option<&StatusTable>,
) -> Result<StatusCoverage, Error> {
    let Some(table) = status_table else {
        return Ok(StatusCoverage::default());
    };

    let orphans: Vec<&str> = table
        .keys()
        .filter(|key| !records.contains_key(*key))
        .map(String::as_str)
        .collect();
    if let Some(first) = orphans.first() {
        return Err(Error::completeness(format!(
            "identifiers only exist in the status table, not in any language file; \
             please delete these keys: `{}`",
            orphans.join(",")
        ))
        .with_identifier(*first));
    }

    let has_status = check_coverage(records, "status", |r| r.status.is_some())?;
    let has_code = check_coverage(records, "code", |r| r.code.is_some())?;

    Ok(StatusCoverage {
        has_status,
        has_code,
    })
}

/// Returns whether any record has the field; fails when only some do.
fn check_coverage<F>(
    records: &BTreeMap<Identifier, BundleRecord>,
    field: &str,
    has_field: F,
) -> Result<bool, Error>
where
    F: Fn(&BundleRecord) -> bool,
{
    if !records.values().any(&has_field) {
        return Ok(false);
    }

    let uncovered: Vec<&str> = records
        .iter()
        .filter(|(_, record)| !has_field(*record))
        .map(|(id, _)| id.as_str())
        .collect();
    match uncovered.first() {
        None => Ok(true),
        Some(first) => Err(Error::completeness(format!(
            "`{}` is set for some identifiers but missing for `{}`",
            field,
            uncovered.join(",")
        ))
        .with_identifier(*first)),
    }
}
