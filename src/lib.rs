pub mod archive;
pub mod config;
pub mod error;
pub mod storage;

pub mod prelude {
    pub use crate::error::{Error, Result};
}
