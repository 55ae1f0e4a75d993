// ── Device directory ──
//
// Resolves caller-facing device ids to platform uuids. Every call issues a
// fresh directory query, so resolution always reflects the latest
// snapshot at the cost of one round trip per lookup; callers needing many
// resolutions batch externally.

use std::sync::Arc;

use meshkit_api::bridge::single_shot;
use meshkit_api::transport::Connection;
use meshkit_api::wire::{DeviceFilter, DeviceRecord};
use tracing::debug;

use crate::error::Error;

/// Query the platform for every device visible to this credential, across
/// all gateways.
pub(crate) async fn list(connection: &Arc<dyn Connection>) -> Result<Vec<DeviceRecord>, Error> {
    let (settle, settled) = single_shot();
    connection.devices(
        DeviceFilter::all_gateways(),
        Box::new(move |result| settle.settle(result)),
    );

    let records = settled.wait().await??;
    debug!(count = records.len(), "directory query complete");
    Ok(records)
}

/// First record whose external id matches, in the snapshot's own order.
pub(crate) fn lookup<'a>(records: &'a [DeviceRecord], id: &str) -> Result<&'a DeviceRecord, Error> {
    records
        .iter()
        .find(|record| record.id.as_deref() == Some(id))
        .ok_or_else(|| Error::DeviceNotFound { id: id.to_owned() })
}

/// Resolve an external id to the platform's internal uuid.
pub(crate) async fn resolve_uuid(
    connection: &Arc<dyn Connection>,
    id: &str,
) -> Result<String, Error> {
    let records = list(connection).await?;
    let record = lookup(&records, id)?;
    debug!(id, uuid = %record.uuid, "resolved device");
    Ok(record.uuid.clone())
}
