// Wire types
//
// Serde models for the payloads and records exchanged with the platform.
// Field names follow the platform's wire format exactly. Records carry
// `#[serde(flatten)]` catch-alls because the platform is loose about field
// presence across device types.

use serde::{Deserialize, Serialize};

// ── Device record ────────────────────────────────────────────────────

/// Raw device record as returned by a directory query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Caller-facing external id. Not every record carries one; a record
    /// without it can never be resolved by id.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub schema: Option<serde_json::Value>,
    /// Platform-internal identifier, distinct from `id`.
    pub uuid: String,
    /// Catch-all for the platform's undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Gateway scope for a directory query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceFilter {
    pub gateways: Vec<String>,
}

impl DeviceFilter {
    /// Every device across every gateway (the `["*"]` scope).
    pub fn all_gateways() -> Self {
        Self {
            gateways: vec!["*".into()],
        }
    }
}

// ── Update payload ───────────────────────────────────────────────────

/// A `set_data`/`get_data` update keyed by the resolved platform uuid.
///
/// Exactly one of the two lists is populated per request; an empty list is
/// left off the wire entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePayload {
    pub uuid: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub set_data: Vec<DataPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub get_data: Vec<DataRequest>,
}

impl UpdatePayload {
    /// A write of one value to one sensor.
    pub fn set(
        uuid: impl Into<String>,
        sensor_id: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        Self {
            uuid: uuid.into(),
            set_data: vec![DataPoint {
                sensor_id: sensor_id.into(),
                value,
            }],
            get_data: Vec::new(),
        }
    }

    /// A read request for one sensor.
    pub fn get(uuid: impl Into<String>, sensor_id: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            set_data: Vec::new(),
            get_data: vec![DataRequest {
                sensor_id: sensor_id.into(),
            }],
        }
    }
}

/// One written sensor value inside a `set_data` update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataPoint {
    pub sensor_id: String,
    pub value: serde_json::Value,
}

/// One requested sensor inside a `get_data` update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataRequest {
    pub sensor_id: String,
}

// ── Subscription ─────────────────────────────────────────────────────

/// Event-channel subscription, scoped to one device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionRequest {
    pub uuid: String,
    /// Channel types to subscribe to. The wire name is `type`.
    #[serde(rename = "type")]
    pub types: Vec<ChannelType>,
}

impl SubscriptionRequest {
    /// Subscribe to a single channel type.
    pub fn new(uuid: impl Into<String>, channel: ChannelType) -> Self {
        Self {
            uuid: uuid.into(),
            types: vec![channel],
        }
    }
}

/// The platform's per-device event channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelType {
    /// Messages the device broadcasts.
    Broadcast,
    /// Messages delivered to the device.
    Received,
    /// Messages the device sends.
    Sent,
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Broadcast => "broadcast",
            Self::Received => "received",
            Self::Sent => "sent",
        };
        f.write_str(name)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn set_payload_serializes_without_get_data() {
        let payload = UpdatePayload::set("device-uuid", "temperature", json!(21.5));

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "uuid": "device-uuid",
                "set_data": [{ "sensor_id": "temperature", "value": 21.5 }],
            })
        );
    }

    #[test]
    fn get_payload_serializes_without_set_data() {
        let payload = UpdatePayload::get("device-uuid", "humidity");

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "uuid": "device-uuid",
                "get_data": [{ "sensor_id": "humidity" }],
            })
        );
    }

    #[test]
    fn subscription_uses_the_wire_name_type() {
        let request = SubscriptionRequest::new("device-uuid", ChannelType::Broadcast);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "uuid": "device-uuid",
                "type": ["broadcast"],
            })
        );
    }

    #[test]
    fn all_gateways_filter() {
        let value = serde_json::to_value(DeviceFilter::all_gateways()).unwrap();
        assert_eq!(value, json!({ "gateways": ["*"] }));
    }

    #[test]
    fn device_record_captures_undocumented_fields() {
        let record: DeviceRecord = serde_json::from_value(json!({
            "id": "living-room",
            "uuid": "3f1c...",
            "status": { "online": true },
            "owner": "some-other-uuid",
            "geo": null,
        }))
        .unwrap();

        assert_eq!(record.id.as_deref(), Some("living-room"));
        assert_eq!(record.name, None);
        assert_eq!(record.status, Some(json!({ "online": true })));
        assert_eq!(record.extra["owner"], "some-other-uuid");
    }

    #[test]
    fn device_record_tolerates_minimal_shape() {
        let record: DeviceRecord = serde_json::from_value(json!({ "uuid": "u-1" })).unwrap();

        assert_eq!(record.id, None);
        assert_eq!(record.schema, None);
        assert!(record.extra.is_empty());
    }
}
