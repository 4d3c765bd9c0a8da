use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A product release as stored and served by the API.
///
/// `id` is the store-assigned primary key; `release_id` is the public,
/// unique identifier (e.g. "fedora-27").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, utoipa::ToSchema)]
pub struct Release {
    pub id: i64,
    pub release_id: String,
    pub short: String,
    pub name: String,
    pub version: i64,
    pub release_date: NaiveDate,
    pub eol_date: NaiveDate,
    pub sigkey: Option<String>,
}

/// Payload for creating a release, or replacing one wholesale (PUT).
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewRelease {
    pub release_id: String,
    pub short: String,
    pub name: String,
    pub version: i64,
    pub release_date: NaiveDate,
    pub eol_date: NaiveDate,
    pub sigkey: Option<String>,
}

/// Partial update (PATCH). Absent fields keep their stored values.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReleaseUpdate {
    pub release_id: Option<String>,
    pub short: Option<String>,
    pub name: Option<String>,
    pub version: Option<i64>,
    pub release_date: Option<NaiveDate>,
    pub eol_date: Option<NaiveDate>,
    pub sigkey: Option<String>,
}
