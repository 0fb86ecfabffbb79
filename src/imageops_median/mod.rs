pub mod config;
pub mod engine;
pub mod partition;
pub mod pool;
pub mod reducer;
pub mod window;
