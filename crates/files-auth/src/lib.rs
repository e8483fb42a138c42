//! # files-auth
//!
//! Session token authentication for Files Manager. Tokens are issued by the
//! account service and stored in the shared cache; this crate only resolves
//! them to an owner identity.

pub mod session;

pub use session::SessionAuthenticator;
