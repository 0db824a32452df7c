//! Teacher session UI
//!
//! The login form and teacher info views, plus the reactive context the
//! session widget renders through.

mod context;
mod login_form;
mod session_panel;
mod teacher_info;

pub use context::{
    PageWidget, SessionContext, SignalRenderer, TEACHER_MODE_CLASS, page_widget,
    provide_session_context, use_session_context,
};
pub use login_form::LoginForm;
pub use session_panel::SessionPanel;
pub use teacher_info::TeacherInfo;
