/// Command-line interface and run orchestration
pub mod cli;
/// Generation constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG rendering of a recorded map
pub mod image;
/// Progress display of placed tiles
pub mod progress;
/// Receivers of placement events
pub mod sink;
/// Tileset description files
pub mod tileset;
