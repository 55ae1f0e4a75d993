// ── Runtime connection configuration ──
//
// Describes *how* to reach the platform: endpoint plus the device
// credential this client authenticates as. Carries credential data and
// never touches disk -- the embedding application constructs a
// `ClientConfig` and hands it in.

use meshkit_api::ConnectOptions;
use secrecy::SecretString;

/// Configuration for a single platform connection.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Platform hostname (e.g. `meshblu.octoblu.com`).
    pub hostname: String,
    /// Platform port.
    pub port: u16,
    /// The credential uuid this client authenticates as.
    pub uuid: String,
    /// The token paired with `uuid`.
    pub token: SecretString,
}

impl ClientConfig {
    pub(crate) fn connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            server: self.hostname.clone(),
            port: self.port,
            uuid: self.uuid.clone(),
            token: self.token.clone(),
        }
    }
}
