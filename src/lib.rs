pub mod client;
pub mod config;
pub mod error;
pub mod interface;
pub mod model;
pub mod store;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{Error, ErrorKind, Result};
pub use interface::HttpClient;

#[cfg(feature = "no-wasm")]
pub use client::request::{create_client, ReqwestClient};
#[cfg(all(feature = "wasm", not(feature = "no-wasm")))]
pub use client::gloo::{create_client, WasmClient};
