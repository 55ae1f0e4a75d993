// meshkit-api: transport contract and wire types for the Meshblu platform

pub mod bridge;
pub mod error;
pub mod transport;
pub mod wire;

pub use error::TransportError;
pub use transport::{AckCallback, ConnectOptions, Connection, Connector, EventHandler, ReplyCallback};
