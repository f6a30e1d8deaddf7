pub mod config;
pub mod error;
pub mod ledger;
pub mod logging;
pub mod relay;
pub mod server;
pub mod signer;

pub use error::{Error, Result};
