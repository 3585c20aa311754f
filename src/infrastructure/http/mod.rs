//! HTTP implementations of the domain gateways.

mod shortener_client;

pub use shortener_client::HttpShortenerClient;
