/// Game persistence trait and its backends.
pub mod game_store;
/// Backend-neutral game records.
pub mod models;
/// Storage error shared by all backends.
pub mod storage;
