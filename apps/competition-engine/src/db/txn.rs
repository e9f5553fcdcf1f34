use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};
use tracing::debug;

use super::txn_policy::{self, TxnPolicy};
use crate::error::AppError;

/// Boxed future borrowing the transaction for its whole lifetime.
pub type TxnFuture<'c, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + Send + 'c>>;

/// Execute a closure within a database transaction.
///
/// Begins a transaction, runs `f`, then applies the process policy on `Ok`
/// (commit, or roll back for dry runs) and rolls back on `Err`, returning
/// the original error. Callers write `with_txn(db, |txn| Box::pin(async move { ... }))`.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, AppError>
where
    R: Send,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, R> + Send,
{
    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => match txn_policy::current() {
            TxnPolicy::CommitOnOk => {
                txn.commit().await?;
                Ok(val)
            }
            TxnPolicy::RollbackOnOk => {
                debug!("Rolling back successful transaction per policy");
                txn.rollback().await?;
                Ok(val)
            }
        },
        Err(err) => {
            // Best-effort rollback; preserve original error
            if let Err(rb) = txn.rollback().await {
                debug!(error = %rb, "Rollback after failure also failed");
            }
            Err(err)
        }
    }
}
