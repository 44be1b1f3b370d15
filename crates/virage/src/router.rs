//! The router itself.
use std::cell::{Cell, RefCell};
use std::time::Instant;

use log::{debug, error, info, warn};

use crate::errors::{RouteError, RouterError};
use crate::fetch::Fetcher;
use crate::history::{HistoryEntry, HistorySink, fragment_for};
use crate::logging::{format_elapsed_time, init_logging};
use crate::routes::RouteTable;
use crate::scripts::extract_scripts;
use crate::surface::Surface;
use crate::views;

/// One registered navigation trigger: a clickable element identity mapped to
/// the route it navigates to, and whether it currently carries the active
/// marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavTrigger {
    pub id: String,
    pub page: String,
    pub active: bool,
}

/// How a navigation ended, when it didn't end in an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The fragment was rendered and the router state updated.
    Committed,
    /// A newer navigation started while this one was in flight; its response
    /// was discarded without touching the surface, history or state.
    Superseded,
}

/// Loads page fragments by route key and keeps the surface, the history and
/// the active-menu state in sync.
///
/// The router owns no document and no event loop. The embedding environment
/// forwards its events (`handle_click`, `handle_pop`) and provides the
/// display primitives through [`Surface`]; the router orchestrates.
///
/// Navigations take `&self`: several may be in flight at once on the same
/// thread, and a sequence counter guarantees that only the most recently
/// started one gets to touch the surface when its response arrives.
///
/// ## Example
/// ```rs
/// use virage::{PageRouter, route_table};
/// use virage::fetch::HttpFetcher;
///
/// let routes = route_table!("accueil", {
///     "accueil" => "pages/page-accueil-temp.html",
///     "faq" => "pages/page-faq.html",
/// });
///
/// let router = PageRouter::new(
///     routes,
///     Box::new(my_surface),
///     Box::new(my_history),
///     HttpFetcher::with_base("http://localhost:8080"),
/// );
/// router.register_trigger("menu-accueil", "accueil");
///
/// router.start(&location_hash).await?;
/// ```
pub struct PageRouter<F: Fetcher> {
    routes: RouteTable,
    fetcher: F,
    surface: RefCell<Box<dyn Surface>>,
    history: RefCell<Box<dyn HistorySink>>,
    triggers: RefCell<Vec<NavTrigger>>,
    current_page: RefCell<Option<String>>,
    sequence: Cell<u64>,
}

impl<F: Fetcher> PageRouter<F> {
    pub fn new(
        routes: RouteTable,
        surface: Box<dyn Surface>,
        history: Box<dyn HistorySink>,
        fetcher: F,
    ) -> Self {
        Self {
            routes,
            fetcher,
            surface: RefCell::new(surface),
            history: RefCell::new(history),
            triggers: RefCell::new(Vec::new()),
            current_page: RefCell::new(None),
            sequence: Cell::new(0),
        }
    }

    /// Registers a navigation trigger: clicks resolving to `id` (see
    /// [`handle_click`](Self::handle_click)) navigate to `page`.
    pub fn register_trigger(&self, id: impl Into<String>, page: impl Into<String>) {
        self.triggers.borrow_mut().push(NavTrigger {
            id: id.into(),
            page: page.into(),
            active: false,
        });
    }

    pub fn triggers(&self) -> Vec<NavTrigger> {
        self.triggers.borrow().clone()
    }

    /// The identity of the trigger currently carrying the active marker.
    pub fn active_trigger(&self) -> Option<String> {
        self.triggers
            .borrow()
            .iter()
            .find(|trigger| trigger.active)
            .map(|trigger| trigger.id.clone())
    }

    /// The key of the last successfully loaded page.
    pub fn current_page(&self) -> Option<String> {
        self.current_page.borrow().clone()
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Initializes logging, resolves the initial route from the location
    /// fragment identifier and performs the initial navigation.
    pub async fn start(&self, hash: &str) -> Result<Navigation, RouterError> {
        init_logging();

        let initial = self.routes.resolve_initial(hash).to_owned();
        self.navigate(&initial, true).await
    }

    /// Loads `page` and displays it.
    ///
    /// With `record_history`, a [`HistoryEntry`] is pushed for the new page;
    /// back/forward-triggered loads pass `false` since the environment's
    /// history already moved.
    ///
    /// An unknown key aborts before anything is displayed. A fetch failure
    /// renders the inline error view and leaves the current page, history
    /// and menu state exactly as they were.
    pub async fn navigate(
        &self,
        page: &str,
        record_history: bool,
    ) -> Result<Navigation, RouterError> {
        let Some(url) = self.routes.url_for(page).map(str::to_owned) else {
            let err = RouteError::Unknown { key: page.to_owned() };
            error!("{}", err);
            return Err(err.into());
        };

        let sequence = self.sequence.get() + 1;
        self.sequence.set(sequence);
        let started = Instant::now();

        self.surface.borrow_mut().render(&views::loading());

        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(err) => {
                error!("Failed to load `{}` from `{}`: {}", page, url, err);
                if self.sequence.get() == sequence {
                    self.surface
                        .borrow_mut()
                        .render(&views::load_error(page, self.routes.default_route()));
                }
                return Err(err.into());
            }
        };

        if self.sequence.get() != sequence {
            debug!("Discarding stale response for `{}`", page);
            return Ok(Navigation::Superseded);
        }

        self.surface.borrow_mut().render(&body);

        if record_history {
            let entry = HistoryEntry::new(page);
            self.history.borrow_mut().push(&entry, &fragment_for(page));
        }

        *self.current_page.borrow_mut() = Some(page.to_owned());
        self.sync_active_menu(page);
        self.replay_scripts(&body);

        info!("Loaded `{}` in {}", page, format_elapsed_time(started.elapsed()));

        Ok(Navigation::Committed)
    }

    /// Programmatic navigation, e.g. from logic reacting to loaded content.
    /// Equivalent to `navigate(page, true)`.
    pub async fn navigate_to(&self, page: &str) -> Result<Navigation, RouterError> {
        self.navigate(page, true).await
    }

    /// Handles a click given the ancestry chain of element identities, from
    /// the event target up to the document root.
    ///
    /// The nearest identity present in the trigger registry wins. Returns
    /// whether the click was intercepted, i.e. whether the environment
    /// should suppress the default link behavior.
    pub async fn handle_click(&self, path: &[&str]) -> bool {
        let Some(page) = self.trigger_target(path) else {
            return false;
        };

        // Already logged inside navigate, nothing more to do for a click
        let _ = self.navigate(&page, true).await;
        true
    }

    /// Handles a back/forward signal carrying the raw history state.
    ///
    /// States that don't hold a recognizable `{page}` record are ignored;
    /// recognized ones are navigated to without touching history, since the
    /// environment's history already moved.
    pub async fn handle_pop(&self, state: Option<serde_json::Value>) {
        let Some(entry) = state.and_then(|value| serde_json::from_value::<HistoryEntry>(value).ok())
        else {
            return;
        };

        let _ = self.navigate(&entry.page, false).await;
    }

    fn trigger_target(&self, path: &[&str]) -> Option<String> {
        let triggers = self.triggers.borrow();

        path.iter().find_map(|id| {
            triggers
                .iter()
                .find(|trigger| trigger.id == *id)
                .map(|trigger| trigger.page.clone())
        })
    }

    fn sync_active_menu(&self, page: &str) {
        let mut triggers = self.triggers.borrow_mut();

        for trigger in triggers.iter_mut() {
            trigger.active = false;
        }

        let active_id = triggers.iter_mut().find(|trigger| trigger.page == page).map(|trigger| {
            trigger.active = true;
            trigger.id.clone()
        });
        drop(triggers);

        self.surface.borrow_mut().mark_active(active_id.as_deref());
    }

    fn replay_scripts(&self, body: &str) {
        match extract_scripts(body) {
            Ok(scripts) => {
                let mut surface = self.surface.borrow_mut();
                for script in &scripts {
                    surface.execute_script(script);
                }
            }
            Err(err) => warn!("{}", err),
        }
    }
}
