//! State pane rendering
//!
//! Draws a [`StateView`] according to its [`ViewLayout`]:
//!
//! - `Bars`: one horizontal bar per element, scaled to the largest value
//! - `Row`: boxed cells with their indices and the pointers under them
//! - `Stack`: cells listed top-first
//! - `Tree`: nodes indented by depth
//!
//! The motion in flight (if any) is shown on its own line with the tween's
//! progress, and the cells it touches are drawn as swapping.

use super::border_style;
use crate::engine::{Cell, Mark, Motion, StateView, ViewLayout};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Data needed to render the state pane
pub struct StateRenderData<'a> {
    pub view: &'a StateView,
    pub motion: Option<&'a Motion>,
    /// Tween progress of `motion`, `0.0..=1.0`
    pub progress: f64,
}

/// Render the state pane
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    data: StateRenderData,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", data.view.title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let content_width = area.width.saturating_sub(4) as usize;
    let moving = data.motion.map(Motion::cells).unwrap_or_default();

    let mut lines = if data.view.cells.is_empty() {
        vec![Line::styled(
            "(empty)",
            Style::default().fg(DEFAULT_THEME.comment),
        )]
    } else {
        match data.view.layout {
            ViewLayout::Bars => bar_lines(data.view, &moving, content_width),
            ViewLayout::Row => row_lines(data.view, &moving),
            ViewLayout::Stack => stack_lines(data.view),
            ViewLayout::Tree => tree_lines(data.view, &moving),
        }
    };

    if let Some(motion) = data.motion {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("⟳ ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(
                describe_motion(motion),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::styled(
                format!(" {:>3.0}%", data.progress * 100.0),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }

    if !data.view.notes.is_empty() {
        lines.push(Line::default());
        for (key, value) in &data.view.notes {
            let value_color = if key == "Warning" {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", key),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(value.clone(), Style::default().fg(value_color)),
            ]));
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn cell_style(cell: &Cell, index: usize, moving: &[usize]) -> Style {
    let mark = if moving.contains(&index) {
        Mark::Swapping
    } else {
        cell.mark
    };
    let style = Style::default().fg(DEFAULT_THEME.mark(mark));
    if mark == Mark::Normal || mark == Mark::Discarded {
        style
    } else {
        style.add_modifier(Modifier::BOLD)
    }
}

fn pointer_label(view: &StateView, index: usize) -> String {
    view.pointers_at(index)
        .map(|p| p.name)
        .collect::<Vec<_>>()
        .join(",")
}

fn bar_lines(view: &StateView, moving: &[usize], width: usize) -> Vec<Line<'static>> {
    let max = view
        .cells
        .iter()
        .filter_map(|c| c.value)
        .map(i64::unsigned_abs)
        .max()
        .unwrap_or(1)
        .max(1);
    // index column, value column and pointer column
    let bar_room = width.saturating_sub(18).max(1);

    view.cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let len = cell
                .value
                .map(|v| bar_len(v, max, bar_room))
                .unwrap_or(0)
                .max(1);
            let style = cell_style(cell, i, moving);
            Line::from(vec![
                Span::styled(
                    format!("{:>2} ", i),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("█".repeat(len), style),
                Span::styled(format!(" {}", cell.label), style),
                Span::styled(
                    format!(" {}", pointer_label(view, i)),
                    Style::default().fg(DEFAULT_THEME.pointer),
                ),
            ])
        })
        .collect()
}

/// Bar length for `value` scaled so that `max` fills `room`
fn bar_len(value: i64, max: u64, room: usize) -> usize {
    // u128 holds any u64 * usize product
    let scaled = u128::from(value.unsigned_abs()) * room as u128 / u128::from(max.max(1));
    (scaled as usize).min(room)
}

fn row_lines(view: &StateView, moving: &[usize]) -> Vec<Line<'static>> {
    let width = view
        .cells
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(1)
        .max(3);

    let mut boxes = Vec::with_capacity(view.cells.len());
    let mut indices = Vec::with_capacity(view.cells.len());
    let mut pointers = Vec::with_capacity(view.cells.len());
    for (i, cell) in view.cells.iter().enumerate() {
        boxes.push(Span::styled(
            format!("[{:^w$}]", cell.label, w = width),
            cell_style(cell, i, moving),
        ));
        indices.push(Span::styled(
            format!(" {:^w$} ", i, w = width),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        let label = pointer_label(view, i);
        pointers.push(Span::styled(
            format!(" {:^w$} ", label, w = width),
            Style::default().fg(DEFAULT_THEME.pointer),
        ));
    }

    vec![Line::from(boxes), Line::from(indices), Line::from(pointers)]
}

fn stack_lines(view: &StateView) -> Vec<Line<'static>> {
    let top = view.cells.len().saturating_sub(1);
    view.cells
        .iter()
        .enumerate()
        .rev()
        .map(|(i, cell)| {
            let marker = if i == top { "top → " } else { "      " };
            Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.pointer)),
                Span::styled(
                    format!("│ {:^5} │", cell.label),
                    cell_style(cell, i, &[]),
                ),
            ])
        })
        .chain(std::iter::once(Line::styled(
            "      └───────┘",
            Style::default().fg(DEFAULT_THEME.comment),
        )))
        .collect()
}

fn tree_lines(view: &StateView, moving: &[usize]) -> Vec<Line<'static>> {
    view.cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let indent = "  ".repeat(cell.depth);
            let branch = if cell.depth == 0 { "● " } else { "└ " };
            Line::from(vec![
                Span::raw(indent),
                Span::styled(branch, Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(cell.label.clone(), cell_style(cell, i, moving)),
                Span::styled(
                    format!("  (depth {})", cell.depth),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])
        })
        .collect()
}

fn describe_motion(motion: &Motion) -> String {
    match motion {
        Motion::Swap { from, to } => format!("swapping [{}] ⇄ [{}]", from, to),
        Motion::Push(v) => format!("pushing {}", v),
        Motion::Pop(v) => format!("popping {}", v),
        Motion::Enqueue { slot } => format!("enqueueing into slot {}", slot),
        Motion::Dequeue { slot } => format!("dequeueing from slot {}", slot),
        Motion::Visit(node) => format!("visiting node {}", node),
    }
}
