use serde::{Deserialize, Serialize};

/// A single inventory record. The UID is caller-supplied and never
/// validated; duplicates are permitted, so UID-keyed operations act on
/// every matching record.
///
/// Wire field names are fixed by the existing API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Desc")]
    pub desc: String,
    /// Non-negative by convention only, not enforced.
    #[serde(rename = "Price")]
    pub price: f64,
}
