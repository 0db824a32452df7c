//! Session panel component
//!
//! Mounts the session widget and both of its views. The stored session is
//! restored once the page has hydrated.

use std::rc::Rc;

use leptos::prelude::*;

use super::context::{page_widget, provide_session_context};
use super::login_form::LoginForm;
use super::teacher_info::TeacherInfo;
use crate::core::WidgetConfig;
use crate::ui::notifications::NotificationManager;

/// Login form or teacher info, whichever the session calls for
#[component]
pub fn SessionPanel(
    /// Where login failures are reported
    notifications: NotificationManager,
    /// Endpoint and storage settings
    #[prop(optional)]
    config: Option<WidgetConfig>,
) -> impl IntoView {
    let ctx = provide_session_context();
    let widget = Rc::new(page_widget(ctx, notifications, config.unwrap_or_default()));

    // Effects only run on the client, after hydration
    let restore = widget.clone();
    Effect::new(move |_| {
        restore.init();
    });

    view! {
        <div class="session-panel">
            <LoginForm widget=widget.clone() />
            <TeacherInfo widget=widget />
        </div>
    }
}
