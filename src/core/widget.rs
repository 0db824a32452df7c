//! Session widget state machine
//!
//! Two states, `Anonymous` and `Authenticated`. The initial state comes from
//! the session store; a confirmed login moves to `Authenticated` and logout
//! moves back. Presentation and user feedback are delegated to `ViewRenderer`
//! and `Notifier` so the lifecycle runs the same against the DOM and against
//! test doubles.

use std::cell::{Cell, RefCell};

use leptos::logging::{error, log, warn};

use super::config::WidgetConfig;
use super::login::{Credentials, LoginError, LoginTransport, interpret_reply};
use super::store::{KeyValueStore, SessionStore, StoreError};
use super::teacher::Teacher;

/// Which view is showing
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Login form visible
    #[default]
    Anonymous,
    /// Teacher info visible
    Authenticated(Teacher),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        match self {
            SessionState::Authenticated(teacher) => Some(teacher),
            SessionState::Anonymous => None,
        }
    }
}

/// Presentation side of the widget
pub trait ViewRenderer {
    /// Hide the login section, show and fill the teacher info
    fn render_authenticated(&self, teacher: &Teacher);

    /// Show the login section, hide the teacher info
    fn render_anonymous(&self);

    /// A login request started or finished
    fn set_pending(&self, pending: bool);

    /// Clear the email and password fields
    fn reset_login_form(&self);
}

/// User-visible error feedback
pub trait Notifier {
    fn notify_error(&self, message: &str);
}

/// Login/logout lifecycle over a session store
pub struct SessionWidget<S, R, T, N> {
    store: SessionStore<S>,
    renderer: R,
    transport: T,
    notifier: N,
    login_endpoint: String,
    state: RefCell<SessionState>,
    in_flight: Cell<bool>,
}

impl<S, R, T, N> SessionWidget<S, R, T, N>
where
    S: KeyValueStore,
    R: ViewRenderer,
    T: LoginTransport,
    N: Notifier,
{
    pub fn new(backend: S, renderer: R, transport: T, notifier: N, config: WidgetConfig) -> Self {
        Self {
            store: SessionStore::with_key(backend, config.storage_key),
            renderer,
            transport,
            notifier,
            login_endpoint: config.login_endpoint,
            state: RefCell::new(SessionState::Anonymous),
            in_flight: Cell::new(false),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn current_teacher(&self) -> Option<Teacher> {
        self.state.borrow().teacher().cloned()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.get()
    }

    /// Render the view matching the stored session.
    ///
    /// A record that fails to decode is removed and the anonymous view shown.
    pub fn init(&self) -> SessionState {
        let state = match self.store.load() {
            Ok(Some(teacher)) => SessionState::Authenticated(teacher),
            Ok(None) => SessionState::Anonymous,
            Err(StoreError::Corrupt(reason)) => {
                warn!("Discarding corrupt session record: {}", reason);
                if let Err(e) = self.store.clear() {
                    warn!("Failed to clear corrupt session record: {}", e);
                }
                SessionState::Anonymous
            }
            Err(e) => {
                warn!("Session storage unreadable, starting signed out: {}", e);
                SessionState::Anonymous
            }
        };

        self.apply(state.clone());
        state
    }

    /// Submit credentials to the login endpoint.
    ///
    /// The view changes only after the endpoint confirmed the login and the
    /// record was persisted. Every failure is reported through the notifier,
    /// except `Busy`, returned while an earlier submission is still pending.
    pub async fn submit_login(&self, email: &str, password: &str) -> Result<Teacher, LoginError> {
        if self.in_flight.get() {
            log!("Ignoring login submission while a request is in flight");
            return Err(LoginError::Busy);
        }

        self.in_flight.set(true);
        self.renderer.set_pending(true);

        let result = self.attempt(&Credentials::new(email, password)).await;

        self.in_flight.set(false);
        self.renderer.set_pending(false);

        match result {
            Ok(teacher) => {
                self.apply(SessionState::Authenticated(teacher.clone()));
                self.renderer.reset_login_form();
                Ok(teacher)
            }
            Err(err) => {
                if err.is_diagnostic() {
                    error!("Login error: {}", err);
                }
                self.notifier.notify_error(&err.user_message());
                Err(err)
            }
        }
    }

    async fn attempt(&self, credentials: &Credentials) -> Result<Teacher, LoginError> {
        let url = credentials.login_url(&self.login_endpoint);
        let reply = self.transport.post(&url).await?;
        let teacher = interpret_reply(&reply)?;
        self.store.save(&teacher)?;
        Ok(teacher)
    }

    /// Forget the session. Purely local, no request is made.
    pub fn logout(&self) {
        if let Err(e) = self.store.clear() {
            warn!("Failed to remove session record: {}", e);
        }
        self.apply(SessionState::Anonymous);
    }

    fn apply(&self, state: SessionState) {
        match &state {
            SessionState::Authenticated(teacher) => self.renderer.render_authenticated(teacher),
            SessionState::Anonymous => self.renderer.render_anonymous(),
        }
        *self.state.borrow_mut() = state;
    }
}
