//! Navigation shell for CareConnect
//!
//! Routes, the screen registry, and the shell state machine that owns
//! the active destination and per-route saved view state.
//!
//! Registry construction is the only fallible step in the whole shell;
//! once a [`ScreenRegistry`] exists every navigation operation is total.
//! Unknown route ids and unknown handler ids are rejected by logging and
//! ignoring in every build, so a stray tap can never take the app down.

use crate::components::{Button, ContainerProps, Element};
use crate::screens;
use crate::theme::ThemeTokens;
use crate::tokens::{sizing, spacing};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::mem;
use thiserror::Error;

// =============================================================================
// Routes
// =============================================================================

/// The closed set of top-level destinations.
///
/// Adding a destination means adding a variant here; the registry
/// refuses to start until every variant has a renderer bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteId {
    /// Dashboard of care summary cards
    Home,
    /// Month calendar and agenda
    Schedule,
    /// Caregiver conversation
    Messages,
    /// Care journal timeline
    Journal,
    /// Profile and administration
    Admin,
}

impl RouteId {
    /// All routes in rail order
    pub fn all() -> [RouteId; 5] {
        [
            RouteId::Home,
            RouteId::Schedule,
            RouteId::Messages,
            RouteId::Journal,
            RouteId::Admin,
        ]
    }

    /// Stable string id, used in handler ids and serialized state
    pub fn id(&self) -> &'static str {
        match self {
            RouteId::Home => "home",
            RouteId::Schedule => "schedule",
            RouteId::Messages => "messages",
            RouteId::Journal => "journal",
            RouteId::Admin => "admin",
        }
    }

    /// Rail icon name
    pub fn icon(&self) -> &'static str {
        match self {
            RouteId::Home => "home",
            RouteId::Schedule => "schedule",
            RouteId::Messages => "message",
            RouteId::Journal => "book",
            RouteId::Admin => "settings",
        }
    }

    /// App bar title shown when the route is active
    pub fn label(&self) -> &'static str {
        match self {
            RouteId::Home => "CareConnect",
            RouteId::Schedule => "Schedule",
            RouteId::Messages => "Messaging",
            RouteId::Journal => "Journal",
            RouteId::Admin => "Admin",
        }
    }

    /// Parse a string id back to a route
    pub fn from_id(id: &str) -> Option<RouteId> {
        match id {
            "home" => Some(RouteId::Home),
            "schedule" => Some(RouteId::Schedule),
            "messages" => Some(RouteId::Messages),
            "journal" => Some(RouteId::Journal),
            "admin" => Some(RouteId::Admin),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        match self {
            RouteId::Home => 0,
            RouteId::Schedule => 1,
            RouteId::Messages => 2,
            RouteId::Journal => 3,
            RouteId::Admin => 4,
        }
    }
}

// =============================================================================
// Screen Registry
// =============================================================================

/// A pure renderer for one destination
pub type ScreenRenderer = fn(&ThemeTokens) -> Element;

/// Errors raised while validating the registry at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// No routes were registered at all
    #[error("screen registry is empty")]
    Empty,

    /// The same route was bound twice
    #[error("route '{0}' registered more than once")]
    DuplicateRoute(&'static str),

    /// A route has no renderer bound
    #[error("route '{0}' has no renderer")]
    MissingRenderer(&'static str),
}

/// The validated route-to-renderer table.
///
/// Built once at startup; construction fails fast on an empty table, a
/// duplicate binding, or any route left without a renderer, so no
/// navigation at runtime can reach an unbound destination.
#[derive(Debug)]
pub struct ScreenRegistry {
    order: Vec<RouteId>,
    renderers: [Option<ScreenRenderer>; 5],
}

impl ScreenRegistry {
    /// Validate a set of route bindings
    pub fn new(bindings: Vec<(RouteId, ScreenRenderer)>) -> Result<Self, RegistryError> {
        if bindings.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut order = Vec::with_capacity(bindings.len());
        let mut renderers: [Option<ScreenRenderer>; 5] = [None; 5];

        for (route, renderer) in bindings {
            if renderers[route.index()].is_some() {
                return Err(RegistryError::DuplicateRoute(route.id()));
            }
            renderers[route.index()] = Some(renderer);
            order.push(route);
        }

        for route in RouteId::all() {
            if renderers[route.index()].is_none() {
                return Err(RegistryError::MissingRenderer(route.id()));
            }
        }

        tracing::info!(routes = order.len(), "screen registry validated");
        Ok(Self { order, renderers })
    }

    /// The standard five-screen binding
    pub fn standard() -> Result<Self, RegistryError> {
        Self::new(vec![
            (RouteId::Home, screens::render_home as ScreenRenderer),
            (RouteId::Schedule, screens::render_schedule),
            (RouteId::Messages, screens::render_messages),
            (RouteId::Journal, screens::render_journal),
            (RouteId::Admin, screens::render_admin),
        ])
    }

    /// Routes in rail order
    pub fn routes(&self) -> &[RouteId] {
        &self.order
    }

    /// The renderer bound to a route
    pub fn renderer(&self, route: RouteId) -> ScreenRenderer {
        // Validated at construction, so every route has a renderer.
        self.renderers[route.index()].unwrap_or(screens::render_home)
    }
}

// =============================================================================
// Saved View State
// =============================================================================

/// Ephemeral per-route UI state preserved across route switches.
///
/// The shell stores and restores this opaquely; nothing in the shell
/// interprets the fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SavedViewState {
    /// Scroll offset in dp
    #[serde(default)]
    pub scroll_offset: f32,
    /// In-progress input text (message compose field)
    #[serde(default)]
    pub draft_text: String,
}

// =============================================================================
// Navigation Shell
// =============================================================================

/// The shell state machine: active route plus per-route saved state.
///
/// Activating the already-active route is an exact no-op. Activating a
/// different route saves the outgoing route's view state under its id
/// and restores the incoming route's saved state, or the default when it
/// was never visited.
///
/// Unknown ids are logged and ignored in all builds rather than
/// asserted; a stale handler id in a deserialized frame must not crash
/// an app whose users may depend on it for care.
pub struct NavigationShell {
    registry: ScreenRegistry,
    current: RouteId,
    saved: HashMap<RouteId, SavedViewState>,
    view: SavedViewState,
}

impl NavigationShell {
    /// Create a shell starting at the given route
    pub fn new(registry: ScreenRegistry, initial: RouteId) -> Self {
        tracing::info!(route = initial.id(), "navigation shell started");
        Self {
            registry,
            current: initial,
            saved: HashMap::new(),
            view: SavedViewState::default(),
        }
    }

    /// The active route
    pub fn current(&self) -> RouteId {
        self.current
    }

    /// The active route's live view state
    pub fn view_state(&self) -> &SavedViewState {
        &self.view
    }

    /// Mutable access to the active route's live view state
    pub fn view_state_mut(&mut self) -> &mut SavedViewState {
        &mut self.view
    }

    /// Saved state for an inactive route, if it was ever left
    pub fn saved_state(&self, route: RouteId) -> Option<&SavedViewState> {
        self.saved.get(&route)
    }

    /// Switch to a destination.
    ///
    /// Re-activating the current route changes nothing, including the
    /// live view state.
    pub fn activate(&mut self, route: RouteId) {
        if route == self.current {
            tracing::debug!(route = route.id(), "route already active");
            return;
        }

        let outgoing = mem::take(&mut self.view);
        self.saved.insert(self.current, outgoing);
        self.view = self.saved.remove(&route).unwrap_or_default();

        tracing::debug!(from = self.current.id(), to = route.id(), "route changed");
        self.current = route;
    }

    /// Switch by string id; unknown ids are logged and ignored
    pub fn activate_id(&mut self, id: &str) -> bool {
        match RouteId::from_id(id) {
            Some(route) => {
                self.activate(route);
                true
            }
            None => {
                tracing::warn!(id, "rejected unknown route id");
                false
            }
        }
    }

    /// Dispatch a handler id from a tapped component.
    ///
    /// `nav.<route-id>` switches destinations. Every other id the
    /// screens emit is inert and dropped. Returns whether the id caused
    /// a state change.
    pub fn dispatch(&mut self, handler: &str) -> bool {
        if let Some(route_id) = handler.strip_prefix("nav.") {
            return self.activate_id(route_id);
        }
        tracing::debug!(handler, "inert handler ignored");
        false
    }

    /// Render the active screen
    pub fn render(&self, theme: &ThemeTokens) -> Element {
        self.registry.renderer(self.current)(theme)
    }

    /// Build the navigation rail for the current state
    pub fn rail(&self, theme: &ThemeTokens) -> Element {
        let buttons = self
            .registry
            .routes()
            .iter()
            .map(|route| {
                Element::Button(
                    Button::new(
                        route.label(),
                        theme.scheme.primary_container.clone(),
                        theme.scheme.on_primary_container.clone(),
                    )
                    .with_icon(route.icon())
                    .with_handler(format!("nav.{}", route.id()))
                    .with_selected(*route == self.current),
                )
            })
            .collect();

        Element::column(
            ContainerProps::column()
                .with_gap(spacing::SPACE_SM)
                .with_padding(spacing::SPACE_SM)
                .with_background(theme.scheme.primary_container.clone()),
            buttons,
        )
    }

    /// Rail width in dp, for platform layout
    pub fn rail_width(&self) -> f32 {
        sizing::rail::WIDTH
    }
}
