mod stats_poller;
mod store_client_http;

pub use stats_poller::{PollerHandle, spawn_stats_poller};
pub use store_client_http::HttpStoreClient;
