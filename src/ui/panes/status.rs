//! Status bar rendering with keybindings and state indicators

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub steps_taken: usize,
    pub is_error: bool,
    pub is_playing: bool,
    pub is_terminal: bool,
    pub is_interactive: bool,
    /// Text typed so far while in command input mode
    pub command_input: Option<&'a str>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let badge_bg = if data.is_error {
        DEFAULT_THEME.error
    } else if data.command_input.is_some() {
        DEFAULT_THEME.secondary
    } else {
        DEFAULT_THEME.primary
    };
    let bar = Style::default().bg(DEFAULT_THEME.current_line_bg);

    let mut left_spans = vec![
        Span::styled(
            format!(" Step {} ", data.steps_taken),
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" | ", bar.fg(DEFAULT_THEME.comment)),
    ];
    match data.command_input {
        Some(input) => {
            left_spans.push(Span::styled("> ", bar.fg(DEFAULT_THEME.secondary)));
            left_spans.push(Span::styled(format!("{}█", input), bar.fg(DEFAULT_THEME.fg)));
        }
        None => left_spans.push(Span::styled(
            format!(" {} ", data.message),
            bar.fg(if data.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        )),
    }

    frame.render_widget(
        Paragraph::new(Line::from(left_spans))
            .style(bar)
            .alignment(Alignment::Left),
        layout[0],
    );

    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar.fg(DEFAULT_THEME.fg);
    let sep_style = bar.fg(DEFAULT_THEME.comment);

    let mut right_spans = if data.command_input.is_some() {
        vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" run ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" esc ", key_style),
            Span::styled(" cancel ", desc_style),
        ]
    } else {
        let mut spans = vec![
            Span::styled(" ←/→ ", key_style),
            Span::styled(" undo/step ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
        ];
        if data.is_interactive {
            spans.push(Span::styled(" i ", key_style));
            spans.push(Span::styled(" command ", desc_style));
        } else {
            spans.push(Span::styled(" ⎵ ", key_style));
            spans.push(Span::styled(" play ", desc_style));
            spans.push(Span::styled("│", sep_style));
            spans.push(Span::styled(" ", desc_style));
            spans.push(Span::styled(" ↵ ", key_style));
            spans.push(Span::styled(" finish ", desc_style));
        }
        spans.extend([
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⌫ ", key_style),
            Span::styled(" reset ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" e ", key_style),
            Span::styled(" export ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled("q", key_style),
            Span::styled(" quit ", desc_style),
        ]);
        spans
    };

    let indicator = if data.command_input.is_some() {
        Some((" ⌨ INPUT ", DEFAULT_THEME.secondary))
    } else if data.is_playing {
        Some((" ▶ PLAYING ", DEFAULT_THEME.secondary))
    } else if data.is_terminal {
        Some((" DONE ", DEFAULT_THEME.success))
    } else if data.steps_taken == 0 {
        Some((" START ", DEFAULT_THEME.primary))
    } else {
        None
    };
    if let Some((label, bg)) = indicator {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            label,
            Style::default()
                .bg(bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(
        Paragraph::new(Line::from(right_spans))
            .style(bar)
            .alignment(Alignment::Right),
        layout[1],
    );
}
