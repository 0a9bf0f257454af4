mod common;

use common::make_profile;
use octoview::config::Config;
use octoview::github::ApiError;
use octoview::remote::RequestState;
use octoview::ui::app::{App, Route};

fn app() -> App {
    App::new(Config::default())
}

fn type_input(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.search_input(ch);
    }
}

#[test]
fn starts_on_search_route() {
    let app = app();
    assert_eq!(app.current_route(), &Route::Search);
}

#[test]
fn navigate_pushes_profile_route_and_starts_loading() {
    let mut app = app();
    app.navigate(Route::Profile {
        username: "octocat".to_string(),
    });
    assert_eq!(
        app.current_route(),
        &Route::Profile {
            username: "octocat".to_string()
        }
    );
    assert!(app.profile().profile.state().is_loading());
}

#[test]
fn navigate_back_returns_to_previous_entry() {
    let mut app = app();
    app.navigate(Route::Profile {
        username: "alice".to_string(),
    });
    app.navigate(Route::Profile {
        username: "bob".to_string(),
    });
    assert!(app.navigate_back());
    assert_eq!(
        app.current_route(),
        &Route::Profile {
            username: "alice".to_string()
        }
    );
    // Remounting re-fetches; nothing is cached between keys
    assert!(app.profile().profile.state().is_loading());
    assert_eq!(app.profile().username(), Some(&"alice".to_string()));
}

#[test]
fn navigate_back_at_root_returns_false() {
    let mut app = app();
    assert!(!app.navigate_back());
    assert!(!app.should_quit());
}

#[test]
fn navigate_back_or_quit_quits_at_root() {
    let mut app = app();
    app.navigate_back_or_quit();
    assert!(app.should_quit());
}

#[test]
fn navigating_to_current_route_is_noop() {
    let mut app = app();
    app.navigate(Route::Profile {
        username: "octocat".to_string(),
    });
    app.navigate(Route::Profile {
        username: "octocat".to_string(),
    });
    // A single back lands on the search root
    assert!(app.navigate_back());
    assert_eq!(app.current_route(), &Route::Search);
}

#[test]
fn open_pinned_navigates_to_configured_username() {
    let mut app = app();
    // Default config pins two profiles
    app.open_pinned(0);
    assert_eq!(
        app.current_route(),
        &Route::Profile {
            username: "jimmynono".to_string()
        }
    );
}

#[test]
fn open_pinned_out_of_range_is_noop() {
    let mut app = app();
    app.open_pinned(99);
    assert_eq!(app.current_route(), &Route::Search);
}

#[test]
fn empty_submit_issues_no_request_and_keeps_state() {
    let mut app = app();
    app.submit_search();
    assert_eq!(app.search().profile.state(), &RequestState::Idle);
}

#[test]
fn successful_search_mounts_follower_grid() {
    let mut app = app();
    type_input(&mut app, "octocat");
    app.submit_search();
    assert!(app.search().profile.state().is_loading());
    assert_eq!(app.followers().followers.state(), &RequestState::Idle);

    app.on_search_resolved("octocat".to_string(), Ok(make_profile("octocat")));
    assert!(app.followers().followers.state().is_loading());
    assert_eq!(
        app.followers().followers.key(),
        Some(&"https://api.github.com/users/octocat/followers".to_string())
    );
}

#[test]
fn failed_search_does_not_mount_follower_grid() {
    let mut app = app();
    type_input(&mut app, "nobody");
    app.submit_search();
    app.on_search_resolved("nobody".to_string(), Err(ApiError::NotFound));
    assert_eq!(app.search().profile.state().error(), Some("User not found"));
    assert_eq!(app.followers().followers.state(), &RequestState::Idle);
}

#[test]
fn stale_search_resolution_does_not_mount_follower_grid() {
    let mut app = app();
    type_input(&mut app, "alice");
    app.submit_search();
    // Replace the query before alice resolves
    for _ in 0.."alice".len() {
        app.search_backspace();
    }
    type_input(&mut app, "bob");
    app.submit_search();

    app.on_search_resolved("alice".to_string(), Ok(make_profile("alice")));
    assert!(app.search().profile.state().is_loading());
    assert_eq!(app.followers().followers.state(), &RequestState::Idle);

    app.on_search_resolved("bob".to_string(), Ok(make_profile("bob")));
    assert_eq!(
        app.search().profile.state().value().map(|p| p.login.as_str()),
        Some("bob")
    );
    assert_eq!(
        app.followers().followers.key(),
        Some(&"https://api.github.com/users/bob/followers".to_string())
    );
}

#[test]
fn new_search_resets_previous_follower_grid() {
    let mut app = app();
    type_input(&mut app, "octocat");
    app.submit_search();
    app.on_search_resolved("octocat".to_string(), Ok(make_profile("octocat")));
    assert!(app.followers().followers.state().is_loading());

    for _ in 0.."octocat".len() {
        app.search_backspace();
    }
    type_input(&mut app, "other");
    app.submit_search();
    // Grid is unmounted until the new profile resolves
    assert_eq!(app.followers().followers.state(), &RequestState::Idle);
}

#[test]
fn profile_error_maps_to_user_message() {
    let mut app = app();
    app.navigate(Route::Profile {
        username: "nobody".to_string(),
    });
    app.on_profile_resolved("nobody".to_string(), Err(ApiError::NotFound));
    assert_eq!(app.profile().profile.state().error(), Some("User not found"));
}

#[test]
fn profile_generic_failure_maps_to_generic_message() {
    let mut app = app();
    app.navigate(Route::Profile {
        username: "octocat".to_string(),
    });
    app.on_profile_resolved(
        "octocat".to_string(),
        Err(ApiError::RequestFailed { status: 500 }),
    );
    assert_eq!(
        app.profile().profile.state().error(),
        Some("An error occurred")
    );
}
