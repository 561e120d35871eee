mod views;
mod utils;
mod storage;
mod routes;
mod configs;
mod tests;
mod error;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::storage::{ default_store, KeyValueStore };
pub use crate::configs::get_state_file;
pub use crate::error::StorageError;
