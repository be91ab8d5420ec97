/// Session management module - Gateway

mod notifier;
mod state;
mod store;

pub use notifier::{ChannelNotifier, LogNotifier, Notice, NoticeKind, Notifier};
pub use state::{Session, UserProfile};
pub use store::{LoadingMode, SessionStore};

pub use secrecy::SecretString;
