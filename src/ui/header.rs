use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::playback::{PlaybackStatus, PlaybackView};
use crate::ui::theme::{
    ACCENT, COMPLETE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED, URGENT,
};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    /// `Slide i/n │ {t}s │ title` plus the exit hint.
    pub fn playback_widget<'a>(&self, view: &PlaybackView<'a>) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let timer_style = if view.urgent {
            Style::default().fg(URGENT).add_modifier(Modifier::BOLD)
        } else if view.status == PlaybackStatus::Finished {
            Style::default().fg(COMPLETE)
        } else {
            Style::default().fg(ACCENT)
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                format!("Slide {}/{}", view.slide_number, view.slide_count),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{}s", view.time_left), timer_style),
            Span::styled("  │  ", separator_style),
            Span::styled(view.title, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Esc: Exit", Style::default().fg(MUTED)),
        ]);

        Self::frame(line)
    }

    pub fn title_widget(&self, title: &'static str) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(title, Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        ]);
        Self::frame(line)
    }

    fn frame(line: Line<'_>) -> Paragraph<'_> {
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
