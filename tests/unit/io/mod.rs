pub mod configuration;
pub mod tileset;
