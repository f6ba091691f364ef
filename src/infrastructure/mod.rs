pub mod cache;
pub mod logging;
pub mod storage;
pub mod user;
