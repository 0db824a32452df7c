//! Login form component
//!
//! The anonymous view: email and password fields posted to the login endpoint.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{PageWidget, use_session_context};

/// Login section, hidden while a teacher is signed in
#[component]
pub fn LoginForm(
    /// Session widget handling the submission
    widget: Rc<PageWidget>,
) -> impl IntoView {
    let session = use_session_context();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let widget = widget.clone();
        let email = session.email.get_untracked();
        let password = session.password.get_untracked();

        spawn_local(async move {
            // The widget renders and reports the outcome itself
            let _ = widget.submit_login(&email, &password).await;
        });
    };

    view! {
        <section
            id="login-section"
            class="login-section"
            class:hidden=move || session.is_authenticated()
        >
            <form id="login-form" on:submit=on_submit>
                <h3>"Teacher Login"</h3>

                <div class="form-group">
                    <label for="teacher-email">"Email"</label>
                    <input
                        type="email"
                        id="teacher-email"
                        name="email"
                        autocomplete="email"
                        placeholder="teacher@mergington.edu"
                        required=true
                        prop:value=move || session.email.get()
                        on:input=move |ev| session.email.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="teacher-password">"Password"</label>
                    <input
                        type="password"
                        id="teacher-password"
                        name="password"
                        autocomplete="current-password"
                        required=true
                        prop:value=move || session.password.get()
                        on:input=move |ev| session.password.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="submit"
                    id="login-button"
                    disabled=move || session.pending.get()
                >
                    {move || if session.pending.get() { "Signing in..." } else { "Login" }}
                </button>
            </form>
        </section>
    }
}
