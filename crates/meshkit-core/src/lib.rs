// meshkit-core: session, directory, and data-channel layer over meshkit-api.

pub mod client;
pub mod config;
pub mod error;
pub mod model;
pub mod value;

mod channel;
mod directory;
mod session;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::Client;
pub use config::ClientConfig;
pub use error::Error;
pub use model::Device;
pub use value::SensorValue;

// Transport-facing types that appear in the public surface.
pub use meshkit_api::transport::{ConnectOptions, Connection, Connector, EventHandler};
pub use meshkit_api::wire::ChannelType;
pub use meshkit_api::TransportError;
