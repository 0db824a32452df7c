pub mod auth;
#[cfg(not(feature = "ssr"))]
pub mod browser;
pub mod notifications;

pub use auth::SessionPanel;
pub use notifications::{NotificationManager, NotificationsContainer};
