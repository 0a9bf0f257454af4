use crate::config::Config;
use crate::github;
use crate::ui::app::{App, Fetcher, Route};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::time::Duration;

/// Runs the UI loop until quit.
///
/// An initial username opens the route-driven profile view directly,
/// the equivalent of deep-linking to `/users/{username}`.
pub fn run(config: Config, initial_username: Option<String>) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let client = github::build_client()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let base_url = config.api.base_url.clone();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config);
    app.attach_fetcher(Fetcher::new(
        runtime.handle().clone(),
        client,
        base_url,
        events.sender(),
    ));

    if let Some(username) = initial_username {
        app.navigate(Route::Profile { username });
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::ProfileResolved { key, result }) => app.on_profile_resolved(key, result),
            Ok(AppEvent::SearchResolved { key, result }) => app.on_search_resolved(key, result),
            Ok(AppEvent::FollowersResolved { key, result }) => {
                app.on_followers_resolved(key, result)
            }
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}
