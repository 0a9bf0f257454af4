use std::sync::mpsc::Sender;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::github::{self, ApiError, FollowerSummary, Profile};
use crate::ui::events::AppEvent;
use crate::ui::followers::{FollowerGridIntent, FollowerGridReducer, FollowerGridState};
use crate::ui::mvi::Reducer;
use crate::ui::profile::{ProfileIntent, ProfileReducer, ProfileState};
use crate::ui::search::{SearchIntent, SearchReducer, SearchState};

/// Current view, driven by explicit route values rather than ambient
/// router state. The profile route carries its username parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Search,
    Profile { username: String },
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Issues fetches on the background runtime and posts tagged resolutions
/// back into the UI channel. Views never talk to the network directly.
pub struct Fetcher {
    runtime: tokio::runtime::Handle,
    client: Client,
    base_url: String,
    events: Sender<AppEvent>,
}

impl Fetcher {
    pub fn new(
        runtime: tokio::runtime::Handle,
        client: Client,
        base_url: String,
        events: Sender<AppEvent>,
    ) -> Self {
        Self {
            runtime,
            client,
            base_url,
            events,
        }
    }

    fn spawn_profile(&self, username: String) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = github::fetch_profile(&client, &base_url, &username).await;
            let _ = tx.send(AppEvent::ProfileResolved {
                key: username,
                result,
            });
        });
    }

    fn spawn_search(&self, username: String) {
        let client = self.client.clone();
        let base_url = self.base_url.clone();
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = github::fetch_profile(&client, &base_url, &username).await;
            let _ = tx.send(AppEvent::SearchResolved {
                key: username,
                result,
            });
        });
    }

    fn spawn_followers(&self, url: String) {
        let client = self.client.clone();
        let tx = self.events.clone();
        self.runtime.spawn(async move {
            let result = github::fetch_followers(&client, &url).await;
            let _ = tx.send(AppEvent::FollowersResolved { key: url, result });
        });
    }
}

pub struct App {
    should_quit: bool,
    config: Config,
    /// Navigation stack; the last entry is the current route.
    routes: Vec<Route>,
    /// Search view state (MVI pattern).
    search: SearchState,
    /// Route-driven profile view state (MVI pattern).
    profile: ProfileState,
    /// Follower grid mounted under the search result (MVI pattern).
    followers: FollowerGridState,
    /// Network side effects; absent in reducer-only tests.
    fetcher: Option<Fetcher>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            config,
            routes: vec![Route::Search],
            search: SearchState::default(),
            profile: ProfileState::default(),
            followers: FollowerGridState::default(),
            fetcher: None,
        }
    }

    pub fn attach_fetcher(&mut self, fetcher: Fetcher) {
        self.fetcher = Some(fetcher);
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn current_route(&self) -> &Route {
        // The stack is seeded with the search route and never fully popped
        static ROOT: Route = Route::Search;
        self.routes.last().unwrap_or(&ROOT)
    }

    pub fn search(&self) -> &SearchState {
        &self.search
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn followers(&self) -> &FollowerGridState {
        &self.followers
    }

    // -- Navigation ---------------------------------------------------------

    /// Pushes a route. Entering a profile route starts its fetch; pushing
    /// the route that is already current is a no-op.
    pub fn navigate(&mut self, route: Route) {
        if self.current_route() == &route {
            return;
        }
        self.routes.push(route.clone());
        self.enter_route(&route);
    }

    /// Pops to the previous navigation entry. Returns false at the root.
    pub fn navigate_back(&mut self) -> bool {
        if self.routes.len() <= 1 {
            return false;
        }
        self.routes.pop();
        let route = self.current_route().clone();
        // Re-entering a profile route re-fetches: results are never cached
        self.enter_route(&route);
        true
    }

    /// Back if there is history, otherwise quit.
    pub fn navigate_back_or_quit(&mut self) {
        if !self.navigate_back() {
            self.request_quit();
        }
    }

    /// Opens the pinned profile at `index` from the navigation header.
    pub fn open_pinned(&mut self, index: usize) {
        let Some(pin) = self.config.pinned.get(index) else {
            return;
        };
        let username = pin.username.clone();
        self.navigate(Route::Profile { username });
    }

    fn enter_route(&mut self, route: &Route) {
        if let Route::Profile { username } = route {
            info!(%username, "opening profile view");
            dispatch_mvi!(
                self,
                profile,
                ProfileReducer,
                ProfileIntent::Load {
                    username: username.clone(),
                }
            );
            if let Some(fetcher) = &self.fetcher {
                fetcher.spawn_profile(username.clone());
            }
        }
    }

    // -- Search view --------------------------------------------------------

    pub fn search_input(&mut self, ch: char) {
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Input(ch));
    }

    pub fn search_backspace(&mut self) {
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Backspace);
    }

    /// Submits the search form. An empty field issues no request and
    /// leaves the previous result untouched.
    pub fn submit_search(&mut self) {
        let username = self.search.input.trim().to_string();
        if username.is_empty() {
            return;
        }
        info!(%username, "search submitted");
        // A new search fully replaces the previous result, grid included
        dispatch_mvi!(self, followers, FollowerGridReducer, FollowerGridIntent::Reset);
        dispatch_mvi!(self, search, SearchReducer, SearchIntent::Submit);
        if let Some(fetcher) = &self.fetcher {
            fetcher.spawn_search(username);
        }
    }

    // -- Fetch resolutions --------------------------------------------------

    pub fn on_profile_resolved(&mut self, key: String, result: Result<Profile, ApiError>) {
        if let Err(err) = &result {
            warn!(%key, %err, "profile fetch failed");
        }
        let result = result.map_err(|err| err.user_message());
        dispatch_mvi!(
            self,
            profile,
            ProfileReducer,
            ProfileIntent::Resolved { key, result }
        );
    }

    pub fn on_search_resolved(&mut self, key: String, result: Result<Profile, ApiError>) {
        if let Err(err) = &result {
            warn!(%key, %err, "search fetch failed");
        }
        let result = result.map_err(|err| err.user_message());
        dispatch_mvi!(
            self,
            search,
            SearchReducer,
            SearchIntent::Resolved {
                key: key.clone(),
                result,
            }
        );
        // Mount the follower grid only when this resolution was accepted
        // as the current search result, never for a discarded stale one.
        if self.search.submitted_username() == Some(&key) {
            let url = self
                .search
                .profile
                .state()
                .value()
                .map(|profile| profile.followers_url.clone());
            if let Some(url) = url {
                self.load_followers(url);
            }
        }
    }

    pub fn on_followers_resolved(
        &mut self,
        key: String,
        result: Result<Vec<FollowerSummary>, ApiError>,
    ) {
        if let Err(err) = &result {
            warn!(%key, %err, "followers fetch failed");
        }
        let result = result.map_err(|err| err.user_message());
        dispatch_mvi!(
            self,
            followers,
            FollowerGridReducer,
            FollowerGridIntent::Resolved { key, result }
        );
    }

    fn load_followers(&mut self, url: String) {
        dispatch_mvi!(
            self,
            followers,
            FollowerGridReducer,
            FollowerGridIntent::Load { url: url.clone() }
        );
        if let Some(fetcher) = &self.fetcher {
            fetcher.spawn_followers(url);
        }
    }
}
