use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::ui::{NotificationManager, NotificationsContainer, SessionPanel};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Login failures show up as toasts
    let notifications = NotificationManager::new();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/teacher-session.css"/>

        <Title text="Mergington High School Activities"/>

        <header class="app-header">
            <div class="app-title">
                <h1>"Mergington High School"</h1>
                <h2>"Extracurricular Activities"</h2>
            </div>
            <SessionPanel notifications=notifications />
        </header>

        <NotificationsContainer notifications=notifications.notifications() />
    }
}
