//! CareConnect UI shell
//!
//! Headless rendering model for an elder-care companion app: design
//! tokens, an accessible typography grid, theme resolution, a closed
//! element vocabulary, five demo screens, and the navigation shell that
//! ties them together.
//!
//! Nothing in this crate draws pixels. Screens produce serializable
//! [`components::Element`] trees from resolved [`theme::ThemeTokens`];
//! a platform frontend walks the tree, paints it, and feeds tapped
//! handler ids back into [`navigation::NavigationShell::dispatch`].
//!
//! # Architecture
//!
//! ```text
//! SystemAppearance -> resolve_theme -> ThemeTokens
//!                                         |
//! NavigationShell (active route, saved view state)
//!     -> ScreenRegistry -> render_* -> Element tree
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod navigation;
pub mod screens;
pub mod theme;
pub mod tokens;
pub mod typography;

pub use components::Element;
pub use navigation::{NavigationShell, RegistryError, RouteId, SavedViewState, ScreenRegistry};
pub use theme::{resolve_theme, SystemAppearance, ThemeTokens};
pub use typography::{TypeRole, TypeScale};
