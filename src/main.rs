//! CareConnect headless shell binary
//!
//! Boots the shell the way a platform frontend would: resolve the theme
//! from the detected appearance, validate the screen registry, start the
//! navigation shell at Home, and emit the initial frame (rail plus
//! active screen) as JSON on stdout.

use app_ui::navigation::{NavigationShell, RouteId, ScreenRegistry};
use app_ui::theme::SystemAppearance;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Frame {
    route: RouteId,
    rail: app_ui::Element,
    screen: app_ui::Element,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let appearance = SystemAppearance::detect();
    let theme = appearance.resolve();
    tracing::info!(dark = theme.dark, source = ?theme.source, "theme resolved");

    // A registry that fails validation is a packaging error; nothing
    // recoverable remains, so bail out before rendering anything.
    let registry = ScreenRegistry::standard()?;
    let shell = NavigationShell::new(registry, RouteId::Home);

    let frame = Frame {
        route: shell.current(),
        rail: shell.rail(&theme),
        screen: shell.render(&theme),
    };
    println!("{}", serde_json::to_string_pretty(&frame)?);

    Ok(())
}
