mod async_runtime;
pub mod config;
pub mod edit_mode;
pub mod http;
pub mod persistence;
pub mod ports;
pub mod reporter;
pub mod resolver;
pub mod tile;

pub use async_runtime::command_runtime;
pub use config::Settings;
pub use edit_mode::{EditModeStore, EditModeSubscription};
pub use persistence::{BoardError, BoardStore};
pub use ports::*;
pub use reporter::OutcomeReporter;
pub use resolver::ExternalUrlResolver;
pub use tile::{AppTile, CommandPhase, TileClick, TileServices, TileView};
