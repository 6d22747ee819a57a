use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::{Component, EventResult};
use crate::report::summary_lines;
use crate::state::AppState;
use crate::util::styles::{HEADER_COLOR, HELP_COLOR, POSITIVE_COLOR};

pub struct SummaryPanel;

impl Default for SummaryPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Component for SummaryPanel {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default().borders(Borders::ALL).title(" SUMMARY ");

        let Some(summary) = &state.summary else {
            let paragraph = Paragraph::new("  No samples.").block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let entries = summary_lines(&state.inputs, summary);
        let last = entries.len().saturating_sub(1);
        let mut lines: Vec<Line> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let value_style = if i == last {
                    Style::default()
                        .fg(POSITIVE_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(HEADER_COLOR)
                };
                Line::from(vec![
                    Span::raw(format!("  {label}: ")),
                    Span::styled(value, value_style),
                ])
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Estimated share of rewards for a fixed pool share.",
            Style::default().fg(HELP_COLOR),
        )));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
