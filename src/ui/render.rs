use crate::github::{FollowerSummary, Profile};
use crate::remote::RequestState;
use crate::ui::app::{App, Route};
use crate::ui::followers::FollowerGridState;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{ACCENT, DIM_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Follower grid columns; with the fixed page size of 12 this renders
/// at most three rows.
const GRID_COLUMNS: usize = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.current_route();

    frame.render_widget(
        Header::new().widget(route, &app.config().pinned),
        header,
    );
    frame.render_widget(Clear, body);

    match route {
        Route::Search => draw_search(frame, app, body),
        Route::Profile { .. } => draw_profile(frame, app, body),
    }

    frame.render_widget(Footer::new().widget(route, footer), footer);
}

fn draw_search(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(body);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(app.search().input.clone(), Style::default().fg(HEADER_TEXT)),
        Span::styled("▏", Style::default().fg(ACCENT)),
    ]))
    .block(
        Block::default()
            .title(" Search GitHub users ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(input, chunks[0]);

    let mut lines: Vec<Line<'static>> = Vec::new();
    match app.search().profile.state() {
        RequestState::Idle => {
            lines.push(Line::from(Span::styled(
                "Enter a username (e.g. octocat) and press Enter.",
                Style::default().fg(DIM_TEXT),
            )));
        }
        RequestState::Loading => {
            lines.push(Line::from(Span::styled(
                "Searching GitHub...",
                Style::default().fg(DIM_TEXT).add_modifier(Modifier::ITALIC),
            )));
        }
        RequestState::Failure(message) => {
            lines.push(error_line(message));
        }
        RequestState::Success(profile) => {
            lines.extend(profile_card_lines(profile, true));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "FOLLOWERS",
                Style::default().fg(DIM_TEXT).add_modifier(Modifier::BOLD),
            )));
            lines.extend(follower_grid_lines(app.followers()));
        }
    }

    let result = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::NONE)
            .style(Style::default()),
    );
    frame.render_widget(result, inset(chunks[1]));
}

fn draw_profile(frame: &mut Frame<'_>, app: &App, body: Rect) {
    match app.profile().profile.state() {
        RequestState::Idle => {}
        RequestState::Loading => {
            let loading = Paragraph::new(Line::from(Span::styled(
                "Fetching profile...",
                Style::default().fg(DIM_TEXT).add_modifier(Modifier::ITALIC),
            )));
            frame.render_widget(loading, inset(body));
        }
        RequestState::Failure(message) => {
            let panel = centered_rect(60, 30, body);
            frame.render_widget(Clear, panel);
            let lines = vec![
                Line::from(Span::styled(
                    "Oops!",
                    Style::default()
                        .fg(STATUS_ERROR)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                error_line(message),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter to go back",
                    Style::default().fg(DIM_TEXT),
                )),
            ];
            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .alignment(ratatui::layout::Alignment::Center)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(STATUS_ERROR)),
                );
            frame.render_widget(widget, panel);
        }
        RequestState::Success(profile) => {
            let card = Paragraph::new(profile_card_lines(profile, false))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .title(format!(" @{} ", profile.login))
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                );
            frame.render_widget(card, inset(body));
        }
    }
}

/// Profile summary shared by both views; the compact variant drops the
/// location/website rows the way the search result card does.
fn profile_card_lines(profile: &Profile, compact: bool) -> Vec<Line<'static>> {
    let name_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    let dim = Style::default().fg(DIM_TEXT);
    let accent = Style::default().fg(ACCENT);

    let mut lines = vec![
        Line::from(Span::styled(profile.display_name().to_string(), name_style)),
        Line::from(Span::styled(format!("@{}", profile.login), accent)),
        Line::from(Span::styled(
            format!("Avatar: {}", profile.avatar_url),
            dim,
        )),
        Line::from(""),
        Line::from(Span::styled(
            profile
                .bio
                .clone()
                .unwrap_or_else(|| "This developer hasn't added a bio yet.".to_string()),
            Style::default().fg(HEADER_TEXT),
        )),
    ];

    if !compact {
        if let Some(location) = &profile.location {
            lines.push(Line::from(Span::styled(
                format!("Location: {}", location),
                dim,
            )));
        }
        if let Some(blog) = profile.blog.as_deref().filter(|b| !b.is_empty()) {
            lines.push(Line::from(Span::styled(format!("Website: {}", blog), accent)));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Public Repos ", dim),
        Span::styled(
            profile.public_repos.to_string(),
            Style::default().fg(STATUS_OK),
        ),
        Span::styled("   Followers ", dim),
        Span::styled(
            profile.followers.to_string(),
            Style::default().fg(STATUS_OK),
        ),
        Span::styled("   Following ", dim),
        Span::styled(
            profile.following.to_string(),
            Style::default().fg(STATUS_OK),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        format!("Profile: {}", profile.html_url),
        dim,
    )));

    lines
}

/// Grid body for the follower section under a search result.
fn follower_grid_lines(state: &FollowerGridState) -> Vec<Line<'static>> {
    let dim = Style::default().fg(DIM_TEXT);

    match state.followers.state() {
        RequestState::Idle => Vec::new(),
        RequestState::Loading => vec![Line::from(Span::styled(
            "Loading followers...",
            dim.add_modifier(Modifier::ITALIC),
        ))],
        RequestState::Failure(message) => vec![error_line(message)],
        RequestState::Success(followers) if followers.is_empty() => {
            vec![Line::from(Span::styled(
                "No followers found.",
                dim.add_modifier(Modifier::ITALIC),
            ))]
        }
        RequestState::Success(followers) => grid_rows(followers),
    }
}

fn grid_rows(followers: &[FollowerSummary]) -> Vec<Line<'static>> {
    // Cells align on the widest entry; the URL row is always the wider one
    let cell_width = followers
        .iter()
        .map(|f| f.login.chars().count().max(f.html_url.chars().count()))
        .max()
        .unwrap_or(0)
        + 2;

    let mut lines = Vec::new();
    for row in followers.chunks(GRID_COLUMNS) {
        let logins: Vec<Span<'static>> = row
            .iter()
            .map(|follower| {
                Span::styled(
                    format!("{:<width$}", follower.login, width = cell_width),
                    Style::default().fg(ACCENT),
                )
            })
            .collect();
        lines.push(Line::from(logins));
        // Each entry links to its profile page, shown as the plain URL
        let urls: Vec<Span<'static>> = row
            .iter()
            .map(|follower| {
                Span::styled(
                    format!("{:<width$}", follower.html_url, width = cell_width),
                    Style::default().fg(DIM_TEXT),
                )
            })
            .collect();
        lines.push(Line::from(urls));
        lines.push(Line::from(""));
    }
    lines
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(STATUS_ERROR),
    ))
}

/// One-cell margin so body text doesn't touch the chrome borders.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}
