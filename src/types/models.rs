use serde::{Deserialize, Serialize};

/// A managed customer installation.
///
/// `latest_pull_date`, `latest_pull_by` and `gsos_version` mirror the most
/// recently appended [`PullHistoryEntry`] for this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub client_name: String,
    pub domain_url: String,
    pub client_id: String,
    pub password: String,
    pub original_password: String,
    pub latest_pull_date: Option<String>,
    pub latest_pull_by: Option<String>,
    pub gsos_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullHistoryEntry {
    pub id: i64,
    pub client_id: i64,
    pub pull_date: String,
    pub pull_by: String,
    pub version: Option<String>,
}

/// Column values for inserting or updating a client row.
///
/// Required columns stay optional here: a missing value is written as NULL
/// and rejected by the schema, not by the caller.
#[derive(Debug, Clone, Default)]
pub struct ClientFields {
    pub client_name: Option<String>,
    pub domain_url: Option<String>,
    pub client_id: Option<String>,
    pub latest_pull_date: Option<String>,
    pub latest_pull_by: Option<String>,
    pub gsos_version: Option<String>,
}

/// A hashed credential together with the plaintext it was derived from.
#[derive(Debug, Clone)]
pub struct Credential {
    pub hash: String,
    pub plaintext: String,
}

#[derive(Debug, Clone, Default)]
pub struct NewPullHistory {
    pub pull_date: Option<String>,
    pub pull_by: Option<String>,
    pub version: Option<String>,
}
