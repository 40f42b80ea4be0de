//! Access gate adapters implementing the `AccessGate` port.

mod shared_secret;

pub use shared_secret::SharedSecretGate;
