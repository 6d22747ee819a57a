//! Settings panel: one slider per scenario input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
};

use super::{Component, EventResult};
use crate::state::{AppState, Slider};
use crate::util::format::format_amount;
use crate::util::styles::{FOCUS_COLOR, HEADER_COLOR, HELP_COLOR, focused_block};

/// Multiplier applied to the step when Shift is held
const FAST_STEPS: f64 = 10.0;

/// Width of the slider track in cells
const TRACK_WIDTH: usize = 12;

pub struct SettingsPanel;

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self
    }

    fn format_value(slider: Slider, value: f64) -> String {
        match slider {
            Slider::PrimaryHoldings | Slider::TotalSupply => format_amount(value),
            Slider::VenueFee => format!("{:.1}", value),
            Slider::PoolDominance | Slider::HighlightSplit => format!("{:.0}", value),
        }
    }

    /// Track like `━━━━●───────` for bounded sliders; unbounded ones get none
    fn track(slider: Slider, value: f64) -> Option<String> {
        let (min, max) = slider.bounds();
        if !max.is_finite() || max <= min {
            return None;
        }

        let position = ((value - min) / (max - min)).clamp(0.0, 1.0);
        let knob = (position * (TRACK_WIDTH - 1) as f64).round() as usize;
        let mut track = String::with_capacity(TRACK_WIDTH * 3);
        for i in 0..TRACK_WIDTH {
            track.push(match i.cmp(&knob) {
                std::cmp::Ordering::Less => '━',
                std::cmp::Ordering::Equal => '●',
                std::cmp::Ordering::Greater => '─',
            });
        }
        Some(track)
    }
}

impl Component for SettingsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let fast = key.modifiers.contains(KeyModifiers::SHIFT);
        let steps = if fast { FAST_STEPS } else { 1.0 };

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => state.select_next(),
            KeyCode::Left | KeyCode::Char('h') => state.adjust_selected(-steps),
            KeyCode::Right | KeyCode::Char('l') => state.adjust_selected(steps),
            KeyCode::Char('H') => state.adjust_selected(-FAST_STEPS),
            KeyCode::Char('L') => state.adjust_selected(FAST_STEPS),
            KeyCode::Char('r') => state.reset(),
            _ => return EventResult::NotHandled,
        }
        EventResult::Handled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = focused_block(" SETTINGS ", true);

        let items: Vec<ListItem> = Slider::ALL
            .iter()
            .map(|&slider| {
                let is_selected = slider == state.selected;
                let label_style = if is_selected {
                    Style::default()
                        .fg(FOCUS_COLOR)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let prefix = if is_selected { "> " } else { "  " };
                let value = slider.value(&state.inputs);

                let mut lines = vec![Line::from(vec![
                    Span::styled(prefix, label_style),
                    Span::styled(slider.label(), label_style),
                    Span::raw(": "),
                    Span::styled(
                        Self::format_value(slider, value),
                        Style::default().fg(HEADER_COLOR),
                    ),
                ])];
                if let Some(track) = Self::track(slider, value) {
                    lines.push(Line::from(vec![
                        Span::raw("    "),
                        Span::styled(track, Style::default().fg(HELP_COLOR)),
                    ]));
                }
                ListItem::new(lines)
            })
            .collect();

        frame.render_widget(List::new(items).block(block), area);
    }
}
