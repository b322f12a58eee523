mod fake_store_client;

pub use fake_store_client::{FakeStoreClient, RecordedCall};
