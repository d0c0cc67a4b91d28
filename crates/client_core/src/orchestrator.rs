//! Session lifecycle: startup restore, login, logout, and the screen and
//! dashboard side effects each one drives.

use std::sync::{Arc, Mutex as StdMutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use shared::{
    domain::{NotificationLevel, Role, Session},
    error::NavError,
};
use storage::{SessionStore, StorageMedium};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    dashboards::{DashboardOutcome, DashboardRegistry, UNKNOWN_ROLE_NOTICE},
    navigation::{menu_for, Navigator},
    roles::has_permission,
    screens::ScreenController,
};

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Credential verifier.
#[async_trait]
pub trait AuthSystem: Send + Sync {
    async fn login(&self, email: &str, password: &str, role: &Role) -> bool;
    async fn logout(&self);
}

/// User-visible notifications.
pub trait NotificationSink: Send + Sync {
    fn show(&self, message: &str, level: NotificationLevel);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavPhase {
    Unauthenticated,
    Authenticating,
    Authenticated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(Session),
    Rejected,
}

struct Inner {
    started: bool,
    session: Option<Session>,
    screens: ScreenController,
}

impl Inner {
    fn ensure_started(&self) -> Result<(), NavError> {
        if self.started {
            Ok(())
        } else {
            Err(NavError::NotStarted)
        }
    }
}

type PendingSlot = StdMutex<Option<String>>;

fn lock_slot(slot: &PendingSlot) -> MutexGuard<'_, Option<String>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a login attempt in flight. Dropping it frees the slot, so an
/// attempt whose future is abandoned leaves the orchestrator signed out
/// instead of blocked.
struct PendingLogin<'a> {
    slot: &'a PendingSlot,
    completed: bool,
}

impl PendingLogin<'_> {
    fn complete(mut self) {
        self.completed = true;
    }
}

impl Drop for PendingLogin<'_> {
    fn drop(&mut self) {
        let email = lock_slot(self.slot).take();
        if !self.completed {
            if let Some(email) = email {
                warn!(%email, "login attempt abandoned before auth resolved");
            }
        }
    }
}

pub struct SessionOrchestrator<M> {
    sessions: SessionStore<M>,
    auth: Arc<dyn AuthSystem>,
    dashboards: DashboardRegistry,
    notifier: Arc<dyn NotificationSink>,
    navigator: Arc<dyn Navigator>,
    inner: Mutex<Inner>,
    /// Email of the login awaiting the auth system. Only touched while
    /// `inner` is held, except when an abandoned attempt is dropped.
    pending: PendingSlot,
}

pub struct SessionOrchestratorBuilder<M> {
    sessions: Option<SessionStore<M>>,
    auth: Option<Arc<dyn AuthSystem>>,
    dashboards: Option<DashboardRegistry>,
    notifier: Option<Arc<dyn NotificationSink>>,
    navigator: Option<Arc<dyn Navigator>>,
}

impl<M: StorageMedium> SessionOrchestratorBuilder<M> {
    pub fn sessions(mut self, sessions: SessionStore<M>) -> Self {
        self.sessions = Some(sessions);
        self
    }

    pub fn auth(mut self, auth: Arc<dyn AuthSystem>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub fn dashboards(mut self, dashboards: DashboardRegistry) -> Self {
        self.dashboards = Some(dashboards);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn NotificationSink>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = Some(navigator);
        self
    }

    /// Fails when a collaborator is missing or a known role has no dashboard.
    pub fn build(self) -> Result<SessionOrchestrator<M>, NavError> {
        let dashboards = required(self.dashboards, "dashboard registry")?;
        let missing = dashboards.missing_roles();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(Role::as_str).collect();
            return Err(NavError::configuration(format!(
                "no dashboard registered for: {}",
                names.join(", ")
            )));
        }

        Ok(SessionOrchestrator {
            sessions: required(self.sessions, "session store")?,
            auth: required(self.auth, "auth system")?,
            dashboards,
            notifier: required(self.notifier, "notification sink")?,
            navigator: required(self.navigator, "navigator")?,
            inner: Mutex::new(Inner {
                started: false,
                session: None,
                screens: ScreenController::new(),
            }),
            pending: StdMutex::new(None),
        })
    }
}

fn required<T>(value: Option<T>, name: &str) -> Result<T, NavError> {
    value.ok_or_else(|| NavError::configuration(format!("missing {name}")))
}

impl<M: StorageMedium> SessionOrchestrator<M> {
    pub fn builder() -> SessionOrchestratorBuilder<M> {
        SessionOrchestratorBuilder {
            sessions: None,
            auth: None,
            dashboards: None,
            notifier: None,
            navigator: None,
        }
    }

    /// Restores a persisted session without re-authenticating, or shows the
    /// login screen. Runs once per process.
    pub async fn startup(&self) -> Result<NavPhase, NavError> {
        let mut inner = self.inner.lock().await;
        if inner.started {
            return Err(NavError::AlreadyStarted);
        }
        inner.started = true;

        match self.sessions.load().await {
            Some(session) => {
                info!(email = %session.email, role = %session.role, "restoring persisted session");
                self.enter_session(&mut inner, session);
            }
            None => {
                info!("no persisted session; showing login");
                inner.session = None;
                inner.screens.enter_unauthenticated();
            }
        }
        Ok(self.phase_of(&inner))
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
        role: impl Into<Role>,
    ) -> Result<LoginOutcome, NavError> {
        let role = role.into();
        let attempt = {
            let inner = self.inner.lock().await;
            inner.ensure_started()?;
            if let Some(session) = &inner.session {
                warn!(email, "login rejected; already signed in");
                return Err(NavError::AlreadyAuthenticated {
                    email: session.email.clone(),
                });
            }
            let mut slot = lock_slot(&self.pending);
            if slot.is_some() {
                warn!(email, "login rejected; another attempt is in flight");
                return Err(NavError::LoginInFlight);
            }
            *slot = Some(email.to_string());
            PendingLogin {
                slot: &self.pending,
                completed: false,
            }
        };

        // The state lock is released here; every other entry point sees the
        // pending attempt and backs off until it resolves or is dropped.
        let accepted = self.auth.login(email, password, &role).await;

        let mut inner = self.inner.lock().await;
        if !accepted {
            info!(email, %role, "login rejected by auth system");
            inner.session = None;
            inner.screens.enter_unauthenticated();
            attempt.complete();
            self.notifier
                .show(INVALID_CREDENTIALS, NotificationLevel::Error);
            return Ok(LoginOutcome::Rejected);
        }

        let session = Session::new(email, role);
        if !self.sessions.save(&session).await {
            warn!(email, "session could not be persisted; it will not survive a restart");
        }
        info!(email, role = %session.role, "login succeeded");
        self.enter_session(&mut inner, session.clone());
        attempt.complete();
        Ok(LoginOutcome::Authenticated(session))
    }

    pub async fn logout(&self) -> Result<(), NavError> {
        let mut inner = self.inner.lock().await;
        inner.ensure_started()?;
        let pending = lock_slot(&self.pending).clone();
        if let Some(email) = pending {
            warn!(%email, "logout rejected; login attempt in flight");
            return Err(NavError::LoginInFlight);
        }

        self.auth.logout().await;
        if !self.sessions.clear().await {
            warn!("persisted session could not be cleared");
        }
        if let Some(session) = inner.session.take() {
            info!(email = %session.email, "logged out");
        }
        inner.screens.enter_unauthenticated();
        Ok(())
    }

    pub async fn phase(&self) -> NavPhase {
        let inner = self.inner.lock().await;
        self.phase_of(&inner)
    }

    pub async fn session(&self) -> Option<Session> {
        self.inner.lock().await.session.clone()
    }

    /// Snapshot of the screen state.
    pub async fn screens(&self) -> ScreenController {
        self.inner.lock().await.screens.clone()
    }

    /// Whether the signed-in role satisfies `required`. False when signed out.
    pub async fn can(&self, required: &Role) -> bool {
        match &self.inner.lock().await.session {
            Some(session) => has_permission(&session.role, required),
            None => false,
        }
    }

    fn phase_of(&self, inner: &Inner) -> NavPhase {
        if inner.session.is_some() {
            NavPhase::Authenticated
        } else if lock_slot(&self.pending).is_some() {
            NavPhase::Authenticating
        } else {
            NavPhase::Unauthenticated
        }
    }

    fn enter_session(&self, inner: &mut Inner, session: Session) {
        inner.screens.enter_authenticated();
        let outcome = self
            .dashboards
            .load_default(&session.role, inner.screens.main_content_mut());
        if outcome == DashboardOutcome::UnknownRole {
            self.notifier
                .show(UNKNOWN_ROLE_NOTICE, NotificationLevel::Error);
        }
        self.navigator.init(&session.role, &menu_for(&session.role));
        inner.session = Some(session);
    }
}
