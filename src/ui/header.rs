use crate::config::PinnedProfile;
use crate::ui::app::Route;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation chrome: the search tab plus pinned profile shortcuts.
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, route: &Route, pinned: &[PinnedProfile]) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default().fg(ACCENT);

        let search_active = matches!(route, Route::Search);
        let mut spans = vec![
            Span::styled("  Octoview", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                "Search",
                if search_active { active_style } else { text_style },
            ),
        ];

        for (index, pin) in pinned.iter().enumerate() {
            let active = matches!(route, Route::Profile { username } if *username == pin.username);
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(
                format!("{} (Alt+{})", pin.label, index + 1),
                if active { active_style } else { text_style },
            ));
        }

        Paragraph::new(Line::from(spans)).block(
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
