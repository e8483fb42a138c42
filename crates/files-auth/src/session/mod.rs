//! Session token resolution.

pub mod authenticator;

pub use authenticator::SessionAuthenticator;
