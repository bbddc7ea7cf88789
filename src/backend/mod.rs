pub mod client;
pub mod errors;
pub mod import;
pub mod tasks;
pub mod types;
pub mod users;

pub use client::BackendClient;
pub use errors::BackendError;
pub use tasks::TaskQuery;
