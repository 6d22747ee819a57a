use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
};
use splitsim_core::ScenarioInputs;

use crate::components::{
    Component, EventResult, reward_chart::RewardChart, settings_panel::SettingsPanel,
    status_bar::StatusBar, summary_panel::SummaryPanel,
};
use crate::state::AppState;

pub struct App {
    state: AppState,
    settings_panel: SettingsPanel,
    summary_panel: SummaryPanel,
    reward_chart: RewardChart,
    status_bar: StatusBar,
}

impl Default for App {
    fn default() -> Self {
        Self::new(ScenarioInputs::default())
    }
}

impl App {
    pub fn new(inputs: ScenarioInputs) -> Self {
        Self {
            state: AppState::new(inputs),
            settings_panel: SettingsPanel::new(),
            summary_panel: SummaryPanel::new(),
            reward_chart: RewardChart::new(),
            status_bar: StatusBar::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        tracing::info!(inputs = ?self.state.inputs, "Starting interactive session");

        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Content above, status bar below
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(rows[0]);

        self.render_sidebar(frame, columns[0]);
        self.reward_chart.render(frame, columns[1], &self.state);
        self.status_bar.render(frame, rows[1], &self.state);
    }

    fn render_sidebar(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(12), Constraint::Length(9)])
            .split(area);

        self.settings_panel.render(frame, chunks[0], &self.state);
        self.summary_panel.render(frame, chunks[1], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                tracing::info!("Exit requested (q pressed)");
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                tracing::info!("Ctrl+C pressed");
                self.state.exit = true;
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.settings_panel.handle_key(key_event, &mut self.state);
        if result == EventResult::Exit {
            self.state.exit = true
        }
    }
}
