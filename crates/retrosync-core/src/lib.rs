pub mod config;
pub mod error;
pub mod logging;

pub mod extract;
pub mod fetch;
pub mod platform;
pub mod retroconf;
pub mod sync;
pub mod timestamp;
pub mod urls;

pub use error::SyncError;
