//! Stateless render functions for each visible pane
//!
//! Every pane reads the snapshot under the playback cursor and draws it; no
//! pane ever mutates controller state.  Scroll offsets live in the [`App`]
//! and are clamped here against the rendered content height.
//!
//! [`App`]: crate::ui::app::App

use crate::playback::Speed;
use crate::trace::Snapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            DEFAULT_THEME.border_focused
        } else {
            DEFAULT_THEME.border_normal
        }))
}

/// Clamp a scroll offset so the last line stays visible
fn clamp_scroll(scroll: &mut usize, content_lines: usize, viewport_lines: usize) -> u16 {
    let max = content_lines.saturating_sub(viewport_lines);
    if *scroll > max {
        *scroll = max;
    }
    *scroll as u16
}

/// Render the explanation pane: the current step's description
pub fn render_explanation_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm_name: &str,
    snapshot: Option<&Snapshot>,
    focused: bool,
) {
    let text = match snapshot {
        Some(snap) => vec![
            Line::from(Span::styled(
                format!("Step {}", snap.index + 1),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                snap.explanation.clone(),
                Style::default().fg(DEFAULT_THEME.fg),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "No trace loaded",
            Style::default().fg(DEFAULT_THEME.comment),
        ))],
    };

    let paragraph = Paragraph::new(text)
        .block(pane_block(algorithm_name, focused))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Render the state pane: every recorded field, in first-recorded order
pub fn render_state_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    focused: bool,
    scroll: &mut usize,
) {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(snap) = snapshot {
        for (name, value) in snap.ordered_fields() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", name),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(value.display(), Style::default().fg(DEFAULT_THEME.number)),
            ]));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no state)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let viewport = area.height.saturating_sub(2) as usize;
    let offset = clamp_scroll(scroll, lines.len(), viewport);
    let paragraph = Paragraph::new(lines)
        .block(pane_block("State", focused))
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Render the call-frame pane: active recursive calls, outermost first.
///
/// The innermost (currently executing) frame is highlighted.
pub fn render_frames_pane(
    frame: &mut Frame,
    area: Rect,
    snapshot: Option<&Snapshot>,
    focused: bool,
    scroll: &mut usize,
) {
    let mut lines: Vec<Line> = Vec::new();
    if let Some(snap) = snapshot {
        let innermost = snap.call_frames.len().saturating_sub(1);
        for (depth, cf) in snap.call_frames.iter().enumerate() {
            let indent = "  ".repeat(depth);
            let style = if depth == innermost {
                Style::default()
                    .fg(DEFAULT_THEME.frame_active)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{}", indent, cf.label),
                style,
            )));
            for (arg_name, arg_value) in &cf.args {
                lines.push(Line::from(Span::styled(
                    format!("{}  {} = {}", indent, arg_name, arg_value.display()),
                    Style::default().fg(DEFAULT_THEME.fg),
                )));
            }
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no active calls)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }

    let viewport = area.height.saturating_sub(2) as usize;
    let offset = clamp_scroll(scroll, lines.len(), viewport);
    let paragraph = Paragraph::new(lines)
        .block(pane_block("Call Frames", focused))
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    current_step: usize,
    total_steps: usize,
    is_playing: bool,
    speed: Speed,
) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(45),
            ratatui::layout::Constraint::Percentage(55),
        ])
        .split(area);

    // Left side: step info and status
    let left_spans = vec![
        Span::styled(
            format!(" Step {}/{} ", current_step + 1, total_steps),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds plus position/play indicators
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" step ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" play ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ↵ / ⌫ ", key_style),
        Span::styled(" end/start ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" 1-4 ", key_style),
        Span::styled(format!(" speed: {} ", speed.label()), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let is_at_start = current_step == 0;
    let is_at_end = current_step + 1 >= total_steps;

    if is_playing {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ PLAYING ",
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_end {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " END ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    } else if is_at_start {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " START ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
