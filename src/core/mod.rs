//! Core session logic for the teacher login widget

pub mod config;
mod login;
mod store;
mod teacher;
mod widget;

pub use config::{Config, WidgetConfig};
pub use login::*;
pub use store::*;
pub use teacher::Teacher;
pub use widget::*;
