//! Main application orchestrator.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::application::ViewSyncController;
use crate::domain::ports::HttpPort;
use crate::presentation::events::EventHandler;
use crate::presentation::ui::voting_screen::{ScreenAction, VotingScreen, VotingScreenState};
use crate::presentation::view_state::ViewState;

/// Terminal front end: owns the controller and feeds it key presses.
pub struct App {
    controller: ViewSyncController<ViewState>,
    screen: VotingScreenState,
    tick_rate: Duration,
    running: bool,
}

impl App {
    #[must_use]
    pub fn new(http: Arc<dyn HttpPort>, status_clear_delay: Duration, tick_rate: Duration) -> Self {
        Self {
            controller: ViewSyncController::new(http, ViewState::new(), status_clear_delay),
            screen: VotingScreenState::new(),
            tick_rate,
            running: true,
        }
    }

    /// # Errors
    /// Returns error if drawing or reading terminal events fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        // First draw sizes the status region before any message is shown.
        terminal.draw(|frame| self.render(frame))?;
        self.controller.load_all().await;

        self.run_event_loop(terminal).await?;

        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut tick = interval(self.tick_rate);
        tick.set_missed_tick_behavior(MissedTickBehavior::Skip);

        terminal.draw(|frame| self.render(frame))?;

        while self.running {
            tokio::select! {
                _ = tick.tick() => {
                    self.controller.expire_messages(Instant::now());
                    terminal.draw(|frame| self.render(frame))?;
                }

                event = terminal_events.next() => {
                    match event {
                        Some(Ok(event)) => self.handle_terminal_event(event).await,
                        Some(Err(e)) => return Err(e.into()),
                        None => self.running = false,
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }
            }
        }

        Ok(())
    }

    async fn handle_terminal_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if !EventHandler::is_press(&key) {
            return;
        }

        let action = self.screen.handle_key(key, self.controller.view_mut());
        self.perform(action).await;
    }

    async fn perform(&mut self, action: ScreenAction) {
        if action != ScreenAction::None {
            debug!(?action, "Screen action");
        }

        match action {
            ScreenAction::None => {}
            ScreenAction::Quit => self.running = false,
            ScreenAction::StartVoting => self.controller.start_voting().await,
            ScreenAction::AddCandidate => self.controller.add_candidate().await,
            ScreenAction::CastVote => self.controller.cast_vote().await,
            ScreenAction::FinalizeVoting => self.controller.finalize_voting().await,
            ScreenAction::RegisterGlobalCandidate => {
                self.controller.register_global_candidate().await;
            }
            ScreenAction::ShowResults => self.controller.show_results().await,
            ScreenAction::ShowChain => self.controller.show_chain().await,
            ScreenAction::VerifyIntegrity => self.controller.verify_integrity().await,
            ScreenAction::RefreshAll => self.controller.load_all().await,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_stateful_widget(
            VotingScreen::new(&self.screen),
            area,
            self.controller.view_mut(),
        );
    }
}
