use serde::{Deserialize, Serialize};

use super::record::{Record, RecordID};

/// An open record annotated with whether its color is primary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenRecord {
    #[serde(flatten)]
    pub record: Record,
    pub is_primary: bool,
}

/// View-ready shape of one fetched page of records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Ids of every record in the batch, in the order received.
    pub ids: Vec<RecordID>,
    /// Records whose disposition is `open`.
    pub open: Vec<OpenRecord>,
    /// Number of `closed` records with a primary color.
    pub closed_primary_count: usize,
    pub previous_page: Option<i64>,
    pub next_page: Option<i64>,
}
