pub mod coin_map;
pub mod config;
pub mod error;
pub mod market;
pub mod paprika;
pub mod resolver;
pub mod ta;

#[cfg(test)]
mod test_support;

pub use error::{CryptoError, CryptoResult};
pub use market::CryptoService;
