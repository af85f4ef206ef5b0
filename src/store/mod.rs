mod pool;
mod schema;
mod sqlite;

pub use pool::{Pool, PooledConnection, build_pool, check_connection};
pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Client operations
    fn list_clients(&self) -> Result<Vec<Client>>;
    fn get_client(&self, id: i64) -> Result<Option<Client>>;
    /// Inserts the client and, when both `latest_pull_date` and
    /// `latest_pull_by` are set, its first history row. Returns the new id.
    fn create_client(
        &self,
        fields: &ClientFields,
        credential: Option<&Credential>,
    ) -> Result<i64>;
    /// Overwrites every non-credential column. Password columns are only
    /// touched when `credential` is given. Unknown ids are not an error.
    fn update_client(
        &self,
        id: i64,
        fields: &ClientFields,
        credential: Option<&Credential>,
    ) -> Result<()>;
    fn delete_client(&self, id: i64) -> Result<bool>;

    // Pull history operations
    fn list_pull_history(&self, client_id: i64) -> Result<Vec<PullHistoryEntry>>;
    /// Appends a history row and copies it onto the client's mirrored
    /// fields, whether or not it is the newest by date.
    fn append_pull_history(&self, client_id: i64, entry: &NewPullHistory) -> Result<i64>;
}
