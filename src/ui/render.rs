use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::model::FontSize;
use crate::ui::app::{App, Screen};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions, slide_rect, split_progress};
use crate::ui::library::LibraryState;
use crate::ui::playback::{PlaybackStatus, PlaybackView};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, COMPLETE, GLOBAL_BORDER, HEADER_TEXT, MUTED, STATUS_ERROR, URGENT,
};

const PLAYBACK_HINTS: &str = " Space: Start/Pause │ R: Reset │ Esc: Exit";
const NOT_FOUND_HINTS: &str = " Esc: Back";
const LIBRARY_HINTS: &str = " Up/Down: Move │ Enter: Present │ Esc: Quit";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    match app.screen() {
        Screen::Library => draw_library(frame, app, area),
        Screen::Playback => match app.playback().view() {
            Some(view) => draw_playback(frame, &view, area),
            None => draw_not_found(frame, app.last_error(), area),
        },
    }
}

fn draw_playback(frame: &mut Frame<'_>, view: &PlaybackView<'_>, area: Rect) {
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().playback_widget(view), header);
    frame.render_widget(Clear, body);

    let (progress, content) = split_progress(body);
    let gauge_color = if view.urgent { URGENT } else { ACCENT };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(gauge_color).bg(GLOBAL_BORDER))
            .ratio(view.progress.clamp(0.0, 1.0))
            .label(""),
        progress,
    );

    if view.ready_prompt {
        let lines = vec![
            Line::from(Span::styled(
                "Ready?",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "{} slides × {}s. Press Space to start.",
                    view.slide_count, view.time_left
                ),
                Style::default().fg(MUTED),
            )),
        ];
        render_centered(frame, lines, content);
    } else if view.status == PlaybackStatus::Finished {
        let lines = vec![
            Line::from(Span::styled(
                "Presentation Complete!",
                Style::default().fg(COMPLETE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Space to restart or Esc to exit.",
                Style::default().fg(MUTED),
            )),
        ];
        render_centered(frame, lines, content);
    } else {
        let text = Paragraph::new(view.slide_text)
            .style(slide_style(view.font_size))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(text, slide_rect(view.font_size, content));
    }

    frame.render_widget(
        Footer::new().widget(footer, PLAYBACK_HINTS, Some(view.action_label)),
        footer,
    );
}

fn draw_not_found(frame: &mut Frame<'_>, error: Option<&str>, area: Rect) {
    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new().title_widget("Pecha Kucha"), header);
    frame.render_widget(Clear, body);

    let mut lines = vec![Line::from(Span::styled(
        "Presentation not found",
        Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD),
    ))];
    if let Some(error) = error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(MUTED),
        )));
    }
    render_centered(frame, lines, body);

    frame.render_widget(Footer::new().widget(footer, NOT_FOUND_HINTS, None), footer);
}

fn draw_library(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (header, body, footer) = layout_regions(area);
    frame.render_widget(Header::new().title_widget("Presentations"), header);
    frame.render_widget(Clear, body);

    let lines = library_lines(app.library());
    frame.render_widget(Paragraph::new(lines), centered_rect(90, 90, body));

    frame.render_widget(Footer::new().widget(footer, LIBRARY_HINTS, None), footer);
}

fn library_lines(library: &LibraryState) -> Vec<Line<'_>> {
    match library {
        LibraryState::Failed { message } => vec![
            Line::from(Span::styled(
                "Could not load presentations",
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(Span::styled(message.as_str(), Style::default().fg(MUTED))),
        ],
        LibraryState::Empty => vec![Line::from("Loading...")],
        LibraryState::Listed { entries, .. } if entries.is_empty() => {
            vec![Line::from(Span::styled(
                "No presentations yet.",
                Style::default().fg(MUTED),
            ))]
        }
        LibraryState::Listed { entries, selected } => entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:>2}. ", idx + 1),
                        Style::default().fg(HEADER_TEXT),
                    ),
                    Span::styled(entry.title.as_str(), Style::default().fg(HEADER_TEXT)),
                    Span::styled(
                        format!(
                            "  {} slides · {}s each · {} min",
                            entry.slide_count, entry.slide_duration, entry.total_minutes
                        ),
                        Style::default().fg(MUTED),
                    ),
                ]);
                if idx == *selected {
                    line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
                } else {
                    line
                }
            })
            .collect(),
    }
}

fn slide_style(font_size: FontSize) -> Style {
    let style = Style::default().fg(HEADER_TEXT);
    match font_size {
        FontSize::Small | FontSize::Medium => style,
        FontSize::Large | FontSize::Xlarge => style.add_modifier(Modifier::BOLD),
    }
}

/// Vertically centre a short block of lines inside `area`.
fn render_centered(frame: &mut Frame<'_>, lines: Vec<Line<'_>>, area: Rect) {
    let height = (lines.len() as u16).min(area.height);
    let top = area.y + area.height.saturating_sub(height) / 2;
    let target = Rect {
        x: area.x,
        y: top,
        width: area.width,
        height,
    };
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        target,
    );
}
