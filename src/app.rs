use crate::config::Config;
use crate::error::AppError;
use crate::events::session::{Event as SessionEvent, Handler as SessionEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::CustomLogger;
use crate::state::{JobBoard, State};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub type SessionEventSender = std::sync::mpsc::Sender<SessionEvent>;
type SessionEventReceiver = std::sync::mpsc::Receiver<SessionEvent>;
type LogReceiver = std::sync::mpsc::Receiver<String>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    config: Config,
}

impl App {
    /// Start a new application according to the given configuration and
    /// initial job board. Returns the result of the application execution.
    ///
    pub async fn start(config: Config, board: JobBoard) -> Result<()> {
        let log_receiver = App::start_logger()?;

        info!("Starting application...");
        let theme = Theme::from_name(&config.theme_name).ok_or_else(|| {
            AppError::UnknownTheme(format!(
                "{} (available: {})",
                config.theme_name,
                Theme::available_themes().join(", ")
            ))
        })?;
        let (tx, rx) = std::sync::mpsc::channel::<SessionEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                tx,
                board,
                config.role.clone(),
                theme,
            ))),
            config,
        };
        app.start_session_effects(rx);
        app.start_ui(log_receiver).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Install the global logger and return the receiving end of its lines.
    ///
    fn start_logger() -> Result<LogReceiver> {
        let logger = CustomLogger::init(LevelFilter::Debug)?;
        let (log_tx, log_rx) = std::sync::mpsc::channel::<String>();
        let log_tx = std::sync::Mutex::new(log_tx);
        logger.set_log_callback(Box::new(move |line| {
            if let Ok(tx) = log_tx.lock() {
                // Receiver is gone once the UI has exited
                let _ = tx.send(line);
            }
        }));
        Ok(log_rx)
    }

    /// Start a separate thread completing login and logout requests.
    ///
    fn start_session_effects(&self, receiver: SessionEventReceiver) {
        debug!("Creating new thread for session effects...");
        let cloned_state = Arc::clone(&self.state);
        let delay = Duration::from_millis(self.config.auth_delay_ms);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to create session effects runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut session_event_handler = SessionEventHandler::new(&cloned_state, delay);
                while let Ok(session_event) = receiver.recv() {
                    if let Err(e) = session_event_handler.handle(session_event).await {
                        error!("Failed to handle session event: {}", e);
                    }
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    async fn start_ui(&self, log_receiver: LogReceiver) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self.run_ui(&mut terminal, &log_receiver).await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_ui(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        log_receiver: &LogReceiver,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            while let Ok(line) = log_receiver.try_recv() {
                state.add_log_entry(line);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
