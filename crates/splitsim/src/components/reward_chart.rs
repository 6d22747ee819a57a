//! Line chart of total reward share against the split to the primary venue.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::styles::{CURVE_COLOR, HELP_COLOR, POSITIVE_COLOR};

/// Points along the highlight marker; spaced out so it reads as dashed
const MARKER_POINTS: usize = 24;

pub struct RewardChart;

impl Default for RewardChart {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardChart {
    pub fn new() -> Self {
        Self
    }

    /// Y bounds around the curve with 10% padding, kept within [0, 100]
    fn y_bounds(curve: &[(f64, f64)]) -> (f64, f64) {
        let min = curve.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
        let max = curve
            .iter()
            .map(|(_, y)| *y)
            .fold(f64::NEG_INFINITY, f64::max);
        if !min.is_finite() || !max.is_finite() {
            return (0.0, 100.0);
        }

        let range = (max - min).max(1.0);
        let padding = range * 0.1;
        ((min - padding).max(0.0), (max + padding).min(100.0))
    }

    /// Vertical marker at `x` spanning `[y_min, y_max]`
    fn marker(x: f64, y_min: f64, y_max: f64) -> Vec<(f64, f64)> {
        (0..MARKER_POINTS)
            .map(|i| {
                let t = i as f64 / (MARKER_POINTS - 1) as f64;
                (x, y_min + (y_max - y_min) * t)
            })
            .collect()
    }
}

impl Component for RewardChart {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Reward share vs split to primary venue (fixed pool share) ");

        let curve = state.result.curve();
        let Some(summary) = &state.summary else {
            let paragraph = Paragraph::new(vec![Line::from("  No data to display.")]).block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let (y_min, y_max) = Self::y_bounds(&curve);
        let highlight_pct = state.inputs.highlight_split * 100.0;
        let marker = Self::marker(highlight_pct, y_min, y_max);
        let optimum = [(summary.optimal_split * 100.0, summary.max_reward)];

        let highlight_label = format!("{:.0}% split", highlight_pct);
        let datasets = vec![
            Dataset::default()
                .name("Total user reward share (%)")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(CURVE_COLOR))
                .data(&curve),
            Dataset::default()
                .name(highlight_label)
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(HELP_COLOR))
                .data(&marker),
            Dataset::default()
                .name("Optimum")
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(POSITIVE_COLOR))
                .data(&optimum),
        ];

        let x_labels = vec![Span::raw("0"), Span::raw("50"), Span::raw("100")];
        let y_labels = vec![
            Span::raw(format!("{:.0}", y_min)),
            Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
            Span::raw(format!("{:.0}", y_max)),
        ];

        let x_axis = Axis::default()
            .title("Share deposited on primary venue (%)".dark_gray())
            .bounds([0.0, 100.0])
            .labels(x_labels);

        let y_axis = Axis::default()
            .title("Reward share (%)".dark_gray())
            .bounds([y_min, y_max])
            .labels(y_labels);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}
