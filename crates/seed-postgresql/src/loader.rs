//! The bulk-load capability.

use crate::entity::Loadable;
use crate::error::LoadError;
use async_trait::async_trait;
use seed_core::BatchPlan;
use tokio_util::sync::CancellationToken;

/// One batch, one table, one load.
///
/// Implementations differ in transfer mechanism and progress granularity
/// but are interchangeable row-for-row. The strategy is picked once per
/// run; the pipeline stays generic over it, so no dispatch happens inside
/// the batch loop.
///
/// Progress ticks are emitted from the implementation's own polling
/// context and must stay ordered within a batch; batches themselves are
/// already serial.
#[async_trait]
pub trait BulkLoad: Send + Sync {
    /// Load the batch into `T`'s table, observing the cancellation token.
    async fn load<T: Loadable>(
        &self,
        rows: &[T],
        plan: &BatchPlan,
        cancel: &CancellationToken,
    ) -> Result<(), LoadError>;
}
