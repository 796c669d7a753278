pub mod classify;
pub mod config;
pub mod gestures;
pub mod stream;
