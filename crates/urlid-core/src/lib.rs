pub mod config;
pub mod error;
pub mod fixture;
pub mod generator;
pub mod id;
pub mod logging;
pub mod protocol;

// Pipeline stages; reachable only through `UrlIdGenerator::generate`.
mod encoding;
mod normalize;
mod port;

pub use error::UrlIdError;
pub use generator::UrlIdGenerator;
pub use id::{IdFormat, IdGenerator, Sha256IdGenerator};
