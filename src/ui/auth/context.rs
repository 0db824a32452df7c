//! Session context for the teacher login widget
//!
//! This module provides:
//! - `SessionContext`, the reactive mirror of the session state and login form
//! - `SignalRenderer`, which drives the page through that context
//! - `PageWidget`, the session widget wired to browser storage and fetch

use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::core::{LoginError, LoginReply, LoginTransport};
use crate::core::{SessionState, SessionWidget, Teacher, ViewRenderer, WidgetConfig};
use crate::ui::notifications::{NotificationManager, ToastNotifier};

/// Class placed on `<body>` while a teacher is signed in
pub const TEACHER_MODE_CLASS: &str = "teacher-mode";

/// Reactive session state shared by the login form and teacher info panel
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Which view is showing
    pub state: RwSignal<SessionState>,
    /// A login request is in flight
    pub pending: RwSignal<bool>,
    /// Login form fields
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    /// Mirrored onto `<body>` as `TEACHER_MODE_CLASS`
    pub teacher_mode: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(SessionState::Anonymous),
            pending: RwSignal::new(false),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            teacher_mode: RwSignal::new(false),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(SessionState::is_authenticated)
    }

    pub fn teacher(&self) -> Option<Teacher> {
        self.state.with(|state| state.teacher().cloned())
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide session context to the component tree
pub fn provide_session_context() -> SessionContext {
    // Server and first client render are both anonymous; the stored session
    // is applied after hydration
    let ctx = SessionContext::new();

    #[cfg(not(feature = "ssr"))]
    {
        let teacher_mode = ctx.teacher_mode;
        Effect::new(move |_| {
            crate::ui::browser::set_body_class(TEACHER_MODE_CLASS, teacher_mode.get());
        });
    }

    provide_context(ctx);
    ctx
}

/// Get session context from the component tree
pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// `ViewRenderer` over the session context signals
#[derive(Clone, Copy)]
pub struct SignalRenderer {
    ctx: SessionContext,
}

impl SignalRenderer {
    pub fn new(ctx: SessionContext) -> Self {
        Self { ctx }
    }
}

impl ViewRenderer for SignalRenderer {
    fn render_authenticated(&self, teacher: &Teacher) {
        self.ctx
            .state
            .set(SessionState::Authenticated(teacher.clone()));
        self.ctx.teacher_mode.set(true);
    }

    fn render_anonymous(&self) {
        self.ctx.state.set(SessionState::Anonymous);
        self.ctx.teacher_mode.set(false);
    }

    fn set_pending(&self, pending: bool) {
        self.ctx.pending.set(pending);
    }

    fn reset_login_form(&self) {
        self.ctx.email.set(String::new());
        self.ctx.password.set(String::new());
    }
}

/// Stand-in transport for server rendering, where no login can happen
#[cfg(feature = "ssr")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerTransport;

#[cfg(feature = "ssr")]
impl LoginTransport for ServerTransport {
    async fn post(&self, _url: &str) -> Result<LoginReply, LoginError> {
        Err(LoginError::Transport(
            "Login not available on server".to_string(),
        ))
    }
}

#[cfg(not(feature = "ssr"))]
pub type PageStore = crate::ui::browser::LocalStorageStore;
#[cfg(feature = "ssr")]
pub type PageStore = crate::core::MemoryStore;

#[cfg(not(feature = "ssr"))]
pub type PageTransport = crate::ui::browser::FetchTransport;
#[cfg(feature = "ssr")]
pub type PageTransport = ServerTransport;

/// Session widget as mounted on the page
pub type PageWidget = SessionWidget<PageStore, SignalRenderer, PageTransport, ToastNotifier>;

/// Build the page widget over `ctx`
pub fn page_widget(
    ctx: SessionContext,
    notifications: NotificationManager,
    config: WidgetConfig,
) -> PageWidget {
    SessionWidget::new(
        PageStore::default(),
        SignalRenderer::new(ctx),
        PageTransport::default(),
        ToastNotifier::new(notifications),
        config,
    )
}
