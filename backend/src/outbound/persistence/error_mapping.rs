//! Driver error classification.

use mongodb::error::{Error as MongoError, ErrorKind};
use tracing::debug;

use crate::domain::ports::StudentRepositoryError;

/// Map a driver error onto the repository port's error variants.
///
/// Server selection, I/O and pool-cleared failures mean the store is not
/// reachable; undecodable documents are decode failures; anything else is a
/// failed query.
pub(super) fn map_mongo_error(error: &MongoError) -> StudentRepositoryError {
    debug!(%error, "mongodb operation failed");
    match error.kind.as_ref() {
        ErrorKind::ServerSelection { .. }
        | ErrorKind::Io(_)
        | ErrorKind::ConnectionPoolCleared { .. }
        | ErrorKind::DnsResolve { .. } => StudentRepositoryError::connection(error.to_string()),
        ErrorKind::BsonDeserialization(_) => StudentRepositoryError::decode(error.to_string()),
        _ => StudentRepositoryError::query(error.to_string()),
    }
}
