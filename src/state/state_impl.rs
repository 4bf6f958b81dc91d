use crate::app::SessionEventSender;
use crate::events::session::Event as SessionEvent;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::ListState;

use super::board::JobBoard;
use super::error::StateError;
use super::form::{FormMode, JobForm};
use super::job::JobRecord;
use super::navigation::View;
use super::session::{SessionAction, SessionStore, UserSession};
use super::status::Status;

const DEFAULT_ROLE: &str = "recruiter";
const MAX_LOG_ENTRIES: usize = 500;

/// Houses data representative of application state.
///
pub struct State {
    session_sender: Option<SessionEventSender>,
    session: SessionStore,
    board: JobBoard,
    job_form: Option<JobForm>,
    view_stack: Vec<View>,
    jobs_list_state: ListState,
    role: String,
    spinner_index: usize,
    log_entries: Vec<String>,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            session_sender: None,
            session: SessionStore::new(),
            board: JobBoard::default(),
            job_form: None,
            view_stack: vec![View::Home],
            jobs_list_state: ListState::default(),
            role: DEFAULT_ROLE.to_string(),
            spinner_index: 0,
            log_entries: vec![],
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(
        session_sender: SessionEventSender,
        board: JobBoard,
        role: String,
        theme: Theme,
    ) -> Self {
        let mut state = State {
            session_sender: Some(session_sender),
            board,
            role,
            theme,
            ..State::default()
        };
        if !state.board.is_empty() {
            state.jobs_list_state.select(Some(0));
        }
        state
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Return the current user session.
    ///
    pub fn session(&self) -> &UserSession {
        self.session.session()
    }

    /// Apply a session action. This is the only way the session changes.
    ///
    pub fn dispatch(&mut self, action: SessionAction) -> &mut Self {
        self.session.dispatch(action);
        self
    }

    /// Mark a login as in flight and ask the session effects to complete it.
    ///
    pub fn request_login(&mut self) -> &mut Self {
        let role = self.role.clone();
        info!("Logging in as '{}'...", role);
        self.dispatch(SessionAction::Login(role.clone()));
        self.send_session_event(SessionEvent::Login { role });
        self
    }

    /// Mark a logout as in flight and ask the session effects to complete it.
    ///
    pub fn request_log_out(&mut self) -> &mut Self {
        info!("Logging out...");
        self.dispatch(SessionAction::LogOut);
        self.send_session_event(SessionEvent::LogOut);
        self
    }

    fn send_session_event(&self, event: SessionEvent) {
        match &self.session_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to send session event: {}", e);
                }
            }
            None => warn!("No session effects attached; '{:?}' stays in flight.", event),
        }
    }

    fn require_authentication(&self, action: &str) -> Result<(), StateError> {
        if self.session().is_authenticated() {
            Ok(())
        } else {
            Err(StateError::NotAuthenticated(action.to_string()))
        }
    }

    /// Return whether a session transition is in flight.
    ///
    pub fn is_session_pending(&self) -> bool {
        self.session().status() == Status::Running
    }

    /// Returns the job board.
    ///
    pub fn get_board(&self) -> &JobBoard {
        &self.board
    }

    /// Return the job list selection for rendering.
    ///
    pub fn get_jobs_list_state(&mut self) -> &mut ListState {
        &mut self.jobs_list_state
    }

    /// Return the index of the selected job.
    ///
    pub fn current_job_index(&self) -> Option<usize> {
        self.jobs_list_state.selected()
    }

    /// Return the selected job.
    ///
    pub fn selected_job(&self) -> Option<&JobRecord> {
        self.current_job_index().and_then(|i| self.board.get(i))
    }

    /// Select the next job, wrapping to the first.
    ///
    pub fn next_job_index(&mut self) -> &mut Self {
        if self.board.is_empty() {
            self.jobs_list_state.select(None);
            return self;
        }
        let next = match self.jobs_list_state.selected() {
            Some(i) if i + 1 < self.board.len() => i + 1,
            _ => 0,
        };
        self.jobs_list_state.select(Some(next));
        self
    }

    /// Select the previous job, wrapping to the last.
    ///
    pub fn previous_job_index(&mut self) -> &mut Self {
        if self.board.is_empty() {
            self.jobs_list_state.select(None);
            return self;
        }
        let previous = match self.jobs_list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => self.board.len() - 1,
        };
        self.jobs_list_state.select(Some(previous));
        self
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::Home)
    }

    /// Push a view onto the stack.
    ///
    pub fn push_view(&mut self, view: View) -> &mut Self {
        self.view_stack.push(view);
        self
    }

    /// Pop the current view, keeping the home view at the bottom.
    ///
    pub fn pop_view(&mut self) -> Option<View> {
        if self.view_stack.len() > 1 {
            self.view_stack.pop()
        } else {
            None
        }
    }

    /// Open a blank form for posting a job.
    ///
    pub fn open_post_job(&mut self) -> Result<&mut Self, StateError> {
        self.require_authentication("post a job")?;
        self.job_form = Some(JobForm::new(None));
        self.push_view(View::PostJob);
        Ok(self)
    }

    /// Open a form seeded from the selected job.
    ///
    pub fn open_edit_job(&mut self) -> Result<&mut Self, StateError> {
        self.require_authentication("edit a job")?;
        let job = match self.selected_job().cloned() {
            Some(job) => job,
            None => {
                warn!("No job selected for editing.");
                return Ok(self);
            }
        };
        debug!("Editing job {:?}...", job.id);
        self.job_form = Some(JobForm::new(Some(job)));
        self.push_view(View::EditJob);
        Ok(self)
    }

    /// Leave the form view and drop the form.
    ///
    pub fn close_job_form(&mut self) -> &mut Self {
        if self.current_view().is_form() {
            self.pop_view();
        }
        self.job_form = None;
        self
    }

    /// Return the active form, if any.
    ///
    pub fn get_job_form(&self) -> Option<&JobForm> {
        self.job_form.as_ref()
    }

    /// Return the active form for editing, if any.
    ///
    pub fn get_job_form_mut(&mut self) -> Option<&mut JobForm> {
        self.job_form.as_mut()
    }

    /// Submit the active form to the board. An edited job closes the form;
    /// a posted job leaves the blank form open for the next one. Returns
    /// whether the board received the job. Requires an authenticated session.
    ///
    pub fn submit_job_form(&mut self) -> bool {
        let editing = match self.job_form.as_ref() {
            Some(form) => matches!(form.mode(), FormMode::Edit(_)),
            None => return false,
        };
        let action = if editing { "edit a job" } else { "post a job" };
        if let Err(e) = self.require_authentication(action) {
            warn!("{}. Press 'Esc' and log in again.", e);
            return false;
        }
        let submitted = match self.job_form.as_mut() {
            Some(form) => form.submit(&mut self.board),
            None => false,
        };
        if !submitted {
            warn!("Job form has invalid fields.");
            return false;
        }
        if self.jobs_list_state.selected().is_none() {
            self.jobs_list_state.select(Some(0));
        }
        if editing {
            self.close_job_form();
        }
        true
    }

    /// Clear the active form.
    ///
    pub fn reset_job_form(&mut self) -> &mut Self {
        if let Some(form) = self.job_form.as_mut() {
            form.reset();
        }
        self
    }

    /// Move the edit target to the next job and re-seed the form if the
    /// target changed.
    ///
    pub fn next_edit_target(&mut self) -> &mut Self {
        self.next_job_index();
        self.resynchronize_edit_target()
    }

    /// Move the edit target to the previous job and re-seed the form if the
    /// target changed.
    ///
    pub fn previous_edit_target(&mut self) -> &mut Self {
        self.previous_job_index();
        self.resynchronize_edit_target()
    }

    fn resynchronize_edit_target(&mut self) -> &mut Self {
        if *self.current_view() != View::EditJob {
            return self;
        }
        let job = match self.selected_job() {
            Some(job) => job.clone(),
            None => return self,
        };
        if let Some(form) = self.job_form.as_mut() {
            // Unsaved edits survive a move that lands on the same listing
            match form.mode() {
                FormMode::Edit(source) if source.id == job.id => {
                    debug!("Edit target {:?} unchanged.", job.id);
                }
                _ => {
                    form.resynchronize(Some(job));
                }
            }
        }
        self
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    /// Append a formatted log line, dropping the oldest beyond the limit.
    ///
    pub fn add_log_entry(&mut self, entry: String) -> &mut Self {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            let excess = self.log_entries.len() - MAX_LOG_ENTRIES;
            self.log_entries.drain(..excess);
        }
        self
    }

    /// Return the captured log lines, oldest first.
    ///
    pub fn get_log_entries(&self) -> &[String] {
        &self.log_entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::JobField;
    use fake::{Fake, Faker};
    use std::sync::mpsc;

    fn valid_record() -> JobRecord {
        JobRecord {
            id: None,
            title: "Platform Engineer".to_string(),
            description: "Keep it running".to_string(),
            location: "Lisbon".to_string(),
            salary: "90k".to_string(),
            skills: "Rust, Linux".to_string(),
            category: "Engineering".to_string(),
            date_of_post: "2000-01-01".to_string(),
            last_date: "2999-12-31".to_string(),
        }
    }

    fn stored_record(id: &str) -> JobRecord {
        let mut record: JobRecord = Faker.fake();
        record.id = Some(id.to_string());
        record
    }

    fn authenticated_state(board: JobBoard) -> (State, mpsc::Receiver<SessionEvent>) {
        let (tx, rx) = mpsc::channel();
        let mut state = State::new(tx, board, "recruiter".to_string(), Theme::default());
        state.dispatch(SessionAction::Login("recruiter".to_string()));
        state.dispatch(SessionAction::LoginSuccess);
        (state, rx)
    }

    #[test]
    fn default_state() {
        let state = State::default();
        assert_eq!(*state.current_view(), View::Home);
        assert!(!state.session().is_authenticated());
        assert_eq!(state.session().status(), Status::Idle);
        assert!(state.get_job_form().is_none());
    }

    #[test]
    fn request_login_marks_running_and_sends_event() {
        let (tx, rx) = mpsc::channel();
        let mut state = State::new(tx, JobBoard::default(), "recruiter".to_string(), Theme::default());
        state.request_login();
        assert!(state.is_session_pending());
        assert_eq!(state.session().role(), Some("recruiter"));
        assert!(matches!(
            rx.try_recv().unwrap(),
            SessionEvent::Login { role } if role == "recruiter"
        ));
    }

    #[test]
    fn request_log_out_sends_event() {
        let (mut state, rx) = authenticated_state(JobBoard::default());
        state.request_log_out();
        assert!(state.is_session_pending());
        assert!(state.session().is_authenticated());
        assert!(matches!(rx.try_recv().unwrap(), SessionEvent::LogOut));
    }

    #[test]
    fn request_without_effects_stays_running() {
        let mut state = State::default();
        state.request_login();
        assert_eq!(state.session().status(), Status::Running);
    }

    #[test]
    fn post_job_requires_authentication() {
        let mut state = State::default();
        assert!(matches!(
            state.open_post_job(),
            Err(StateError::NotAuthenticated(_))
        ));
        assert_eq!(*state.current_view(), View::Home);
    }

    #[test]
    fn post_job_keeps_blank_form_open() {
        let (mut state, _rx) = authenticated_state(JobBoard::default());
        state.open_post_job().unwrap();
        assert_eq!(*state.current_view(), View::PostJob);
        let record = valid_record();
        for field in JobField::ALL {
            let value = record.get(field).to_string();
            state.get_job_form_mut().unwrap().set_field(field, value);
        }
        assert!(state.submit_job_form());
        assert_eq!(state.get_board().len(), 1);
        assert_eq!(*state.current_view(), View::PostJob);
        assert_eq!(*state.get_job_form().unwrap().record(), JobRecord::default());
        assert_eq!(state.current_job_index(), Some(0));
    }

    #[test]
    fn invalid_post_is_not_stored() {
        let (mut state, _rx) = authenticated_state(JobBoard::default());
        state.open_post_job().unwrap();
        assert!(!state.submit_job_form());
        assert!(state.get_board().is_empty());
        assert!(!state.get_job_form().unwrap().errors().is_empty());
    }

    #[test]
    fn edit_job_updates_board_and_closes_form() {
        let mut record = valid_record();
        record.id = Some("job-1".to_string());
        let (mut state, _rx) = authenticated_state(JobBoard::new(vec![record]));
        state.open_edit_job().unwrap();
        assert_eq!(*state.current_view(), View::EditJob);
        state
            .get_job_form_mut()
            .unwrap()
            .set_field(JobField::Salary, "95k");
        assert!(state.submit_job_form());
        assert_eq!(*state.current_view(), View::Home);
        assert!(state.get_job_form().is_none());
        assert_eq!(state.get_board().find("job-1").unwrap().salary, "95k");
        assert_eq!(state.get_board().len(), 1);
    }

    #[test]
    fn switching_edit_target_reseeds_form() {
        let first = stored_record("job-1");
        let second = stored_record("job-2");
        let (mut state, _rx) =
            authenticated_state(JobBoard::new(vec![first.clone(), second.clone()]));
        state.open_edit_job().unwrap();
        state
            .get_job_form_mut()
            .unwrap()
            .set_field(JobField::Title, "unsaved");
        state.next_edit_target();
        assert_eq!(*state.get_job_form().unwrap().record(), second);
        state.previous_edit_target();
        assert_eq!(*state.get_job_form().unwrap().record(), first);
    }

    #[test]
    fn single_job_edit_target_keeps_unsaved_edits() {
        let only = stored_record("job-1");
        let (mut state, _rx) = authenticated_state(JobBoard::new(vec![only.clone()]));
        state.open_edit_job().unwrap();
        state
            .get_job_form_mut()
            .unwrap()
            .set_field(JobField::Title, "unsaved edit");
        state.next_edit_target();
        assert_eq!(state.get_job_form().unwrap().record().title, "unsaved edit");
        state.previous_edit_target();
        assert_eq!(state.get_job_form().unwrap().record().title, "unsaved edit");
        assert_eq!(*state.get_job_form().unwrap().mode(), FormMode::Edit(only));
    }

    #[test]
    fn submit_after_log_out_is_refused() {
        let (mut state, _rx) = authenticated_state(JobBoard::default());
        state.open_post_job().unwrap();
        state.dispatch(SessionAction::LogOut);
        state.dispatch(SessionAction::LogOutSuccess);
        let record = valid_record();
        for field in JobField::ALL {
            let value = record.get(field).to_string();
            state.get_job_form_mut().unwrap().set_field(field, value);
        }
        assert!(!state.submit_job_form());
        assert!(state.get_board().is_empty());
        assert_eq!(state.get_job_form().unwrap().record().title, record.title);
        assert_eq!(*state.current_view(), View::PostJob);
    }

    #[test]
    fn close_job_form_returns_home() {
        let (mut state, _rx) = authenticated_state(JobBoard::default());
        state.open_post_job().unwrap();
        state.close_job_form();
        assert_eq!(*state.current_view(), View::Home);
        assert!(state.get_job_form().is_none());
        assert_eq!(state.pop_view(), None);
    }

    #[test]
    fn job_selection_wraps() {
        let board = JobBoard::new(vec![stored_record("a"), stored_record("b")]);
        let (mut state, _rx) = authenticated_state(board);
        assert_eq!(state.current_job_index(), Some(0));
        state.next_job_index();
        assert_eq!(state.current_job_index(), Some(1));
        state.next_job_index();
        assert_eq!(state.current_job_index(), Some(0));
        state.previous_job_index();
        assert_eq!(state.current_job_index(), Some(1));
    }

    #[test]
    fn spinner_wraps() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner_index();
        }
        assert_eq!(*state.get_spinner_index(), 0);
    }

    #[test]
    fn log_entries_are_capped() {
        let mut state = State::default();
        for i in 0..(MAX_LOG_ENTRIES + 3) {
            state.add_log_entry(format!("line {}", i));
        }
        assert_eq!(state.get_log_entries().len(), MAX_LOG_ENTRIES);
        assert_eq!(state.get_log_entries()[0], "line 3");
    }
}
