pub mod api;

pub use api::AnkiClient;
