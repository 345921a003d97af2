pub mod album;
pub mod config;
pub mod error;
pub mod s3;
pub mod site;

pub use album::Album;
pub use config::Config;
pub use error::{Error, Result};
pub use s3::S3Client;
