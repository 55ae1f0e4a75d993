// ── Public device projection ──

use meshkit_api::wire::DeviceRecord;
use serde::Serialize;

/// A device as exposed to callers.
///
/// The platform-internal uuid is kept out of this projection; it is
/// retained below this layer and used only for id resolution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: Option<String>,
    pub status: Option<serde_json::Value>,
    pub schema: Option<serde_json::Value>,
}

impl From<DeviceRecord> for Device {
    fn from(record: DeviceRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            status: record.status,
            schema: record.schema,
        }
    }
}
