pub mod attendance;
pub mod settings;
