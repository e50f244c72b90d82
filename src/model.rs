mod config;
mod snap;

pub use self::config::{AppConfig, AppState, DEFAULT_API_KEY, DEFAULT_BASE_URL};
pub use self::snap::{FeedSnap, SenderProfile, Snap, SnapContent, UNKNOWN_SENDER, User};
