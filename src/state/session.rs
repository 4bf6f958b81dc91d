//! User session slice.
//!
//! The session is a single record describing authentication status, the
//! status of any in-flight login or logout, and the requested role. It can
//! only be changed by dispatching a [`SessionAction`] through a
//! [`SessionStore`].

use super::status::Status;
use log::*;

/// Snapshot of the user session.
///
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct UserSession {
    is_authenticated: bool,
    status: Status,
    role: Option<String>,
}

impl UserSession {
    /// Return whether the user is authenticated.
    ///
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Return the session status.
    ///
    pub fn status(&self) -> Status {
        self.status
    }

    /// Return the requested role, if any.
    ///
    pub fn role(&self) -> Option<&str> {
        self.role.as_deref()
    }
}

/// Specifying the transition requests accepted by the session slice.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    Login(String),
    LoginSuccess,
    LogOut,
    LogOutSuccess,
}

/// Compute the next session from the current one and an action.
///
/// Every transition is total and leaves the fields it does not name
/// untouched. There is no failure transition: a request left in flight keeps
/// the status at `Running` until a success action arrives.
pub fn reduce(session: &UserSession, action: &SessionAction) -> UserSession {
    let mut next = session.clone();
    match action {
        SessionAction::Login(role) => {
            next.status = Status::Running;
            next.role = Some(role.clone());
        }
        SessionAction::LoginSuccess => {
            next.is_authenticated = true;
            next.status = Status::Ready;
        }
        SessionAction::LogOut => {
            next.status = Status::Running;
        }
        SessionAction::LogOutSuccess => {
            next.is_authenticated = false;
            next.status = Status::Idle;
        }
    }
    next
}

/// Owns the session and applies dispatched actions in order.
///
#[derive(Debug, Default)]
pub struct SessionStore {
    session: UserSession,
}

impl SessionStore {
    /// Return a new store holding the initial session.
    ///
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Return the current session.
    ///
    pub fn session(&self) -> &UserSession {
        &self.session
    }

    /// Apply an action, replacing the current session.
    ///
    pub fn dispatch(&mut self, action: SessionAction) -> &UserSession {
        debug!("Dispatching session action '{:?}'...", action);
        self.session = reduce(&self.session, &action);
        &self.session
    }
}
