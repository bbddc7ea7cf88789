pub mod client;
pub mod session;

pub use client::{AuthClient, AuthError};
pub use session::Session;
