use crate::state::{SessionAction, State};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Specify different session event types.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Login { role: String },
    LogOut,
}

/// Specify struct for completing session requests.
///
/// The state has already been moved to `running` by the time an event
/// arrives; the handler only decides when the matching success action is
/// dispatched.
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    delay: Duration,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, delay: Duration) -> Self {
        Handler { state, delay }
    }

    /// Handle session events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing session event '{:?}'...", event);
        match event {
            Event::Login { role } => self.login(role).await?,
            Event::LogOut => self.log_out().await?,
        }
        Ok(())
    }

    async fn login(&mut self, role: String) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        let mut state = self.state.lock().await;
        state.dispatch(SessionAction::LoginSuccess);
        info!("Logged in as '{}'.", role);
        Ok(())
    }

    async fn log_out(&mut self) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        let mut state = self.state.lock().await;
        state.dispatch(SessionAction::LogOutSuccess);
        info!("Logged out.");
        Ok(())
    }
}
