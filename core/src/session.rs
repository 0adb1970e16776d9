//! Single-threaded dispatcher: one session, one engine, one theme.
//!
//! RULE: all mutation goes through `dispatch()`. Timer firings arrive
//! as `Message::Tick` on the same path as user commands, so ticks and
//! commands are strictly serialized.

use crate::{
    clock::Scheduler,
    command::{Command, Message},
    config::StreamConfig,
    engine::AccrualEngine,
    error::StreamResult,
    event::StreamEvent,
    format::NumberFormat,
    normalizer::normalize,
    snapshot::DisplaySnapshot,
    theme::Theme,
    types::SessionId,
};

pub struct Session<S: Scheduler, F: NumberFormat> {
    pub session_id: SessionId,
    engine:         AccrualEngine<S>,
    fmt:            F,
    theme:          Theme,
    quit:           bool,
}

impl<S: Scheduler, F: NumberFormat> Session<S, F> {
    pub fn new(scheduler: S, fmt: F, theme: Theme) -> Self {
        let session_id = uuid::Uuid::new_v4().to_string();
        log::debug!("session {session_id} opened (theme={})", theme.as_str());
        Self {
            session_id,
            engine: AccrualEngine::new(scheduler),
            fmt,
            theme,
            quit: false,
        }
    }

    /// Build from config: theme, pre-filled amount, optional autostart.
    pub fn from_config(scheduler: S, fmt: F, config: &StreamConfig) -> StreamResult<Self> {
        let mut session = Self::new(scheduler, fmt, config.resolve_theme());
        if let Some(text) = &config.amount {
            session.dispatch(Command::Input { text: text.clone() })?;
        }
        if config.autostart {
            session.dispatch(Command::Start)?;
        }
        Ok(session)
    }

    pub fn engine(&self) -> &AccrualEngine<S> { &self.engine }
    pub fn theme(&self) -> Theme { self.theme }
    pub fn should_quit(&self) -> bool { self.quit }

    pub fn dispatch(&mut self, msg: impl Into<Message>) -> StreamResult<Vec<StreamEvent>> {
        let msg: Message = msg.into();
        let events: Vec<StreamEvent> = match msg {
            Message::Tick(timer_id) => self.engine.on_tick(timer_id).into_iter().collect(),
            Message::Command(cmd) => match cmd {
                Command::Input { text } => {
                    let input = normalize(&text, &self.fmt);
                    vec![self.engine.set_input(input)]
                }
                Command::Start => vec![self.engine.start()?],
                Command::Pause => self.engine.pause().into_iter().collect(),
                Command::Reset => vec![self.engine.reset()],
                Command::ToggleTheme => {
                    self.theme = self.theme.toggle();
                    vec![StreamEvent::ThemeChanged { theme: self.theme }]
                }
                Command::GetState => vec![],
                Command::Quit => {
                    self.engine.shutdown();
                    self.quit = true;
                    vec![]
                }
            },
        };

        for event in &events {
            if !matches!(event, StreamEvent::Ticked { .. }) {
                log::info!("session {}: {}", self.session_id, event.name());
            }
        }
        Ok(events)
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        let engine = &self.engine;
        DisplaySnapshot {
            session_id:     self.session_id.clone(),
            state:          engine.state(),
            theme:          self.theme,
            input:          engine.input().display.clone(),
            input_enabled:  engine.input_enabled(),
            can_start:      engine.can_start(),
            live:           engine.is_running(),
            ticks:          engine.ticks(),
            earnings:       engine.earnings(),
            earned_display: engine
                .has_started()
                .then(|| self.fmt.format_currency(engine.earnings())),
            rates:          engine.rates().map(|r| r.display(&self.fmt)),
            started_at:     engine.started_at(),
        }
    }
}
