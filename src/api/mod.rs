pub mod client;
pub mod models;
pub mod query;

pub use client::ApiClient;
pub use models::ReleaseInfo;
pub use query::ReleaseQuery;
