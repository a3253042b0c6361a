use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid number range: min {min} is greater than max {max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Cannot draw {count} unique numbers from a range of {available}")]
    PoolTooLarge { count: usize, available: u64 },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
