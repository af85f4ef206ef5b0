use serde::Deserialize;

use crate::types::{ClientFields, NewPullHistory};

/// Body of `POST /api/clients` and `PUT /api/clients/{id}`.
///
/// Every field is optional so that incomplete bodies reach the database and
/// fail there rather than at deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct ClientRequest {
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default)]
    pub domain_url: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub latest_pull_date: Option<String>,
    #[serde(default)]
    pub latest_pull_by: Option<String>,
    #[serde(default)]
    pub gsos_version: Option<String>,
}

impl ClientRequest {
    /// Splits the request into its column values and password. Empty pull
    /// metadata is stored as NULL.
    #[must_use]
    pub fn into_parts(self) -> (ClientFields, Option<String>) {
        let fields = ClientFields {
            client_name: self.client_name,
            domain_url: self.domain_url,
            client_id: self.client_id,
            latest_pull_date: non_empty(self.latest_pull_date),
            latest_pull_by: non_empty(self.latest_pull_by),
            gsos_version: non_empty(self.gsos_version),
        };
        (fields, self.password)
    }
}

/// Body of `POST /api/clients/{id}/history`.
#[derive(Debug, Default, Deserialize)]
pub struct PullHistoryRequest {
    #[serde(default)]
    pub pull_date: Option<String>,
    #[serde(default)]
    pub pull_by: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl From<PullHistoryRequest> for NewPullHistory {
    fn from(req: PullHistoryRequest) -> Self {
        Self {
            pull_date: req.pull_date,
            pull_by: req.pull_by,
            version: non_empty(req.version),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
