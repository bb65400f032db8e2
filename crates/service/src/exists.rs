//! The narrow predicate services use to check references into other families.

use async_trait::async_trait;
use tracing::warn;

use crate::errors::ServiceError;

/// "Does a live row with this id exist?"
///
/// Never fails: a storage error is logged and answered with `false`, so a
/// caller cannot tell "absent" from "could not look". Services that hold a
/// reference to another family only ever see this trait.
#[async_trait]
pub trait ExistsById: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> bool;
}

/// Collapse a gateway existence lookup into the predicate's answer.
pub(crate) fn answer(family: &'static str, id: i64, lookup: Result<bool, ServiceError>) -> bool {
    match lookup {
        Ok(found) => found,
        Err(e) => {
            warn!(family, id, error = %e, "existence check failed; treating as absent");
            false
        }
    }
}

/// Fail with `ReferenceNotFound` naming `field` unless `target` knows `id`.
pub(crate) async fn require<T>(target: &T, field: &'static str, id: i64) -> Result<(), ServiceError>
where
    T: ExistsById + ?Sized,
{
    if target.exists_by_id(id).await {
        Ok(())
    } else {
        Err(ServiceError::ReferenceNotFound { field })
    }
}
