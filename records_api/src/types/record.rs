use serde::{Deserialize, Serialize};

pub type RecordID = i64;

/// Status of a record as reported by the service.
///
/// Values other than `open` and `closed` are kept verbatim in
/// [`Disposition::Other`] and count as neither.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Disposition {
    Open,
    Closed,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for Disposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Disposition::Open => "open",
                Disposition::Closed => "closed",
                Disposition::Other(value) => value.as_str(),
            }
        )?;
        Ok(())
    }
}

/// A single entry of the records collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordID,
    pub color: String,
    pub disposition: Disposition,
}

impl Record {
    pub fn is_open(&self) -> bool {
        self.disposition == Disposition::Open
    }

    pub fn is_closed(&self) -> bool {
        self.disposition == Disposition::Closed
    }
}
