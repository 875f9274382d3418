// exported modules
pub mod client;
pub mod error;
pub mod model;

// re-exports
pub use client::TokenClient;
pub use error::*;
pub use model::*;

// internal modules
mod util;
