pub mod feed;
pub mod model;
pub mod remote;
pub mod store;
pub mod sync;
pub mod tui;
pub mod viewer;

mod tui_shell;
