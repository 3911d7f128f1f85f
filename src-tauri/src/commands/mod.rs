pub mod attendance;
pub mod config;
pub mod meeting;
pub mod roster;
