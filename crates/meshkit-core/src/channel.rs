// ── Data channel ──
//
// Typed read/write/subscribe operations against a resolved device. Each
// operation resolves the caller-facing id first; if coercion or
// resolution fails, nothing reaches the wire.

use std::sync::Arc;

use meshkit_api::bridge::single_shot;
use meshkit_api::transport::Connection;
use meshkit_api::wire::{ChannelType, SubscriptionRequest, UpdatePayload};
use tracing::debug;

use crate::directory;
use crate::error::Error;
use crate::value::SensorValue;

/// Write one sensor value.
///
/// The acknowledgment carries no success/failure signal; an ack only
/// means the platform received the request. That weak guarantee is the
/// platform's, not ours to strengthen.
pub(crate) async fn set_data(
    connection: &Arc<dyn Connection>,
    id: &str,
    sensor_id: &str,
    raw_value: &str,
) -> Result<(), Error> {
    let value = SensorValue::parse(raw_value)?;
    let uuid = directory::resolve_uuid(connection, id).await?;

    debug!(id, sensor_id, "sending set_data update");
    send_update(connection, UpdatePayload::set(uuid, sensor_id, value.into_json())).await
}

/// Ask the device to publish a reading for one sensor.
///
/// Resolves on acknowledgment; the reading itself arrives later through
/// an event the caller subscribes to separately.
pub(crate) async fn request_data(
    connection: &Arc<dyn Connection>,
    id: &str,
    sensor_id: &str,
) -> Result<(), Error> {
    let uuid = directory::resolve_uuid(connection, id).await?;

    debug!(id, sensor_id, "sending get_data update");
    send_update(connection, UpdatePayload::get(uuid, sensor_id)).await
}

/// Register for events from one device, scoped to a single channel type.
pub(crate) async fn subscribe(
    connection: &Arc<dyn Connection>,
    id: &str,
    channel: ChannelType,
) -> Result<(), Error> {
    let uuid = directory::resolve_uuid(connection, id).await?;

    debug!(id, %channel, "subscribing");
    let (settle, settled) = single_shot();
    connection.subscribe(
        SubscriptionRequest::new(uuid, channel),
        Box::new(move |result| settle.settle(result)),
    );
    settled.wait().await??;
    Ok(())
}

async fn send_update(
    connection: &Arc<dyn Connection>,
    payload: UpdatePayload,
) -> Result<(), Error> {
    let (settle, settled) = single_shot();
    connection.update(payload, Box::new(move || settle.settle(())));
    settled.wait().await?;
    Ok(())
}
