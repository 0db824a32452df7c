//! Teacher info component
//!
//! The authenticated view: who is signed in, and the logout button.

use std::rc::Rc;

use leptos::prelude::*;

use super::context::{PageWidget, use_session_context};

/// Signed-in teacher panel, hidden while anonymous
#[component]
pub fn TeacherInfo(
    /// Session widget handling logout
    widget: Rc<PageWidget>,
) -> impl IntoView {
    let session = use_session_context();

    let name = move || session.teacher().map(|t| t.name).unwrap_or_default();
    let email = move || session.teacher().map(|t| t.email).unwrap_or_default();
    let role = move || {
        session
            .teacher()
            .and_then(|t| t.role().map(str::to_string))
    };

    view! {
        <div
            id="teacher-info"
            class="teacher-info"
            class:hidden=move || !session.is_authenticated()
        >
            <p>
                "Logged in as "
                <span class="teacher-name">{name}</span>
            </p>
            <p class="teacher-email">{email}</p>
            {move || role().map(|role| view! { <p class="teacher-role">{role}</p> })}
            <button type="button" id="logout-button" on:click=move |_| widget.logout()>
                "Logout"
            </button>
        </div>
    }
}
