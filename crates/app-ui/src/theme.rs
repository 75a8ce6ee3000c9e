//! Theme provider for CareConnect
//!
//! Resolves the full set of theme tokens (semantic color roles, the
//! typography grid, and the shape scale) from the system dark-mode flag
//! and an optional platform-supplied dynamic palette.
//!
//! # Palettes
//!
//! The static palettes use soothing colors chosen for an elder-care
//! setting: soft green primary, muted teal secondary, warm orange accent.
//! When the platform offers a dynamic palette and the app has dynamic
//! color enabled, the platform palette wins; otherwise resolution falls
//! back to the static constants. There is no error path; resolution is
//! a pure function of its inputs.

use crate::tokens::ShapeScale;
use crate::typography::TypeScale;
use serde::{Deserialize, Serialize};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as an RGB hex string (e.g., "#6BAA75")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to a hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

// =============================================================================
// Color Scheme
// =============================================================================

/// Semantic color roles for one theme variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    /// Primary brand color
    pub primary: Color,
    /// Content on primary
    pub on_primary: Color,
    /// Primary container (rail, app bars)
    pub primary_container: Color,
    /// Content on primary container
    pub on_primary_container: Color,
    /// Secondary color
    pub secondary: Color,
    /// Content on secondary
    pub on_secondary: Color,
    /// Secondary container (cards, buttons)
    pub secondary_container: Color,
    /// Content on secondary container
    pub on_secondary_container: Color,
    /// Tertiary accent color
    pub tertiary: Color,
    /// Content on tertiary
    pub on_tertiary: Color,
    /// Tertiary container
    pub tertiary_container: Color,
    /// Content on tertiary container
    pub on_tertiary_container: Color,
    /// Window background
    pub background: Color,
    /// Content on background
    pub on_background: Color,
    /// Surface color
    pub surface: Color,
    /// Content on surface
    pub on_surface: Color,
    /// Error color
    pub error: Color,
    /// Content on error
    pub on_error: Color,
}

impl ColorScheme {
    /// Look up a role by its semantic name
    pub fn get(&self, role: &str) -> Option<&Color> {
        match role {
            "primary" => Some(&self.primary),
            "on_primary" => Some(&self.on_primary),
            "primary_container" => Some(&self.primary_container),
            "on_primary_container" => Some(&self.on_primary_container),
            "secondary" => Some(&self.secondary),
            "on_secondary" => Some(&self.on_secondary),
            "secondary_container" => Some(&self.secondary_container),
            "on_secondary_container" => Some(&self.on_secondary_container),
            "tertiary" => Some(&self.tertiary),
            "on_tertiary" => Some(&self.on_tertiary),
            "tertiary_container" => Some(&self.tertiary_container),
            "on_tertiary_container" => Some(&self.on_tertiary_container),
            "background" => Some(&self.background),
            "on_background" => Some(&self.on_background),
            "surface" => Some(&self.surface),
            "on_surface" => Some(&self.on_surface),
            "error" => Some(&self.error),
            "on_error" => Some(&self.on_error),
            _ => None,
        }
    }

    /// All role name/value pairs, for validation sweeps
    pub fn roles(&self) -> Vec<(&'static str, &Color)> {
        vec![
            ("primary", &self.primary),
            ("on_primary", &self.on_primary),
            ("primary_container", &self.primary_container),
            ("on_primary_container", &self.on_primary_container),
            ("secondary", &self.secondary),
            ("on_secondary", &self.on_secondary),
            ("secondary_container", &self.secondary_container),
            ("on_secondary_container", &self.on_secondary_container),
            ("tertiary", &self.tertiary),
            ("on_tertiary", &self.on_tertiary),
            ("tertiary_container", &self.tertiary_container),
            ("on_tertiary_container", &self.on_tertiary_container),
            ("background", &self.background),
            ("on_background", &self.on_background),
            ("surface", &self.surface),
            ("on_surface", &self.on_surface),
            ("error", &self.error),
            ("on_error", &self.on_error),
        ]
    }
}

/// The static light palette
pub fn light_scheme() -> ColorScheme {
    ColorScheme {
        primary: "#6BAA75".to_string(), // soft green
        on_primary: "#FFFFFF".to_string(),
        primary_container: "#D4EADC".to_string(), // pale mint
        on_primary_container: "#1A371F".to_string(),

        secondary: "#8EA3A3".to_string(), // muted teal
        on_secondary: "#FFFFFF".to_string(),
        secondary_container: "#DAE4E4".to_string(),
        on_secondary_container: "#101F1F".to_string(),

        tertiary: "#FFB74D".to_string(), // warm orange accent
        on_tertiary: "#000000".to_string(),
        tertiary_container: "#FFECB3".to_string(),
        on_tertiary_container: "#332300".to_string(),

        background: "#F7F8F8".to_string(), // off-white
        on_background: "#1A1C1D".to_string(),
        surface: "#F7F8F8".to_string(),
        on_surface: "#1A1C1D".to_string(),

        error: "#BA1A1A".to_string(),
        on_error: "#FFFFFF".to_string(),
    }
}

/// The static dark palette
pub fn dark_scheme() -> ColorScheme {
    ColorScheme {
        primary: "#9ACFA0".to_string(),
        on_primary: "#00390B".to_string(),
        primary_container: "#20521C".to_string(),
        on_primary_container: "#BCECC2".to_string(),

        secondary: "#B3CAC9".to_string(),
        on_secondary: "#21302F".to_string(),
        secondary_container: "#364A49".to_string(),
        on_secondary_container: "#E0E7EA".to_string(),

        tertiary: "#FFD180".to_string(),
        on_tertiary: "#663F00".to_string(),
        tertiary_container: "#4B2E00".to_string(),
        on_tertiary_container: "#FFE0B2".to_string(),

        background: "#121312".to_string(),
        on_background: "#E1E3E2".to_string(),
        surface: "#121312".to_string(),
        on_surface: "#E1E3E2".to_string(),

        error: "#FFB4AB".to_string(),
        on_error: "#690005".to_string(),
    }
}

// =============================================================================
// Dynamic Palette
// =============================================================================

/// A platform-supplied color palette with both variants.
///
/// Stands in for the dynamic color schemes newer platforms derive from
/// the user's wallpaper or system accent. The platform hands the app
/// both variants; resolution picks one per the dark-mode flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicPalette {
    /// Light variant
    pub light: ColorScheme,
    /// Dark variant
    pub dark: ColorScheme,
}

impl DynamicPalette {
    /// The variant matching the dark-mode flag
    pub fn variant(&self, dark_mode: bool) -> &ColorScheme {
        if dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }
}

/// Which branch the theme resolver took
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeSource {
    /// Static palette constants
    #[default]
    StaticPalette,
    /// Platform-supplied dynamic palette
    PlatformDynamic,
}

// =============================================================================
// Theme Tokens
// =============================================================================

/// The immutable token snapshot all screens read during one render pass.
///
/// Recomputed wholesale by [`resolve_theme`] whenever its inputs change;
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeTokens {
    /// Resolved semantic colors
    pub scheme: ColorScheme,
    /// Resolved typography grid
    pub typography: TypeScale,
    /// Corner radius scale
    pub shapes: ShapeScale,
    /// Which palette branch produced the scheme
    pub source: ThemeSource,
    /// Whether this is the dark variant
    pub dark: bool,
}

/// Resolve theme tokens from system appearance inputs.
///
/// The dynamic palette is used only when `dynamic_color_enabled` is true
/// AND the platform actually supplied one; any other combination falls
/// back silently to the static light/dark constants. Typography and
/// shapes do not depend on the color branch.
pub fn resolve_theme(
    dark_mode: bool,
    dynamic_color_enabled: bool,
    platform_palette: Option<&DynamicPalette>,
) -> ThemeTokens {
    let (scheme, source) = match platform_palette {
        Some(palette) if dynamic_color_enabled => {
            (palette.variant(dark_mode).clone(), ThemeSource::PlatformDynamic)
        }
        _ => {
            let scheme = if dark_mode {
                dark_scheme()
            } else {
                light_scheme()
            };
            (scheme, ThemeSource::StaticPalette)
        }
    };

    ThemeTokens {
        scheme,
        typography: TypeScale::default(),
        shapes: ShapeScale::default(),
        source,
        dark: dark_mode,
    }
}

// =============================================================================
// System Appearance
// =============================================================================

/// The platform inputs the theme resolver depends on.
///
/// The caller owns re-resolving the theme when any of these change; the
/// resolver itself never watches the system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemAppearance {
    /// System dark-mode flag
    pub dark_mode: bool,
    /// Whether the app opts into platform dynamic color
    pub dynamic_color_enabled: bool,
    /// Platform dynamic palette, when the platform can supply one
    pub dynamic_palette: Option<DynamicPalette>,
}

impl Default for SystemAppearance {
    fn default() -> Self {
        Self {
            dark_mode: false,
            dynamic_color_enabled: true,
            dynamic_palette: None,
        }
    }
}

impl SystemAppearance {
    /// Detect the current appearance.
    ///
    /// The headless shell has no compositor to ask, so this returns the
    /// light default with no dynamic capability; a platform frontend
    /// replaces it with real queries.
    pub fn detect() -> Self {
        Self::default()
    }

    /// Resolve theme tokens for this appearance
    pub fn resolve(&self) -> ThemeTokens {
        resolve_theme(
            self.dark_mode,
            self.dynamic_color_enabled,
            self.dynamic_palette.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_palette() -> DynamicPalette {
        let mut light = light_scheme();
        light.primary = "#112233".to_string();
        let mut dark = dark_scheme();
        dark.primary = "#445566".to_string();
        DynamicPalette { light, dark }
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#6BAA75"), Some((107, 170, 117)));
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("121312"), Some((18, 19, 18)));
        assert_eq!(parse_hex_color("#FF"), None);
    }

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(rgb_to_hex(107, 170, 117), "#6BAA75");
        assert_eq!(rgb_to_hex(0, 0, 0), "#000000");
    }

    #[test]
    fn test_light_scheme_constants() {
        let scheme = light_scheme();
        assert_eq!(scheme.primary, "#6BAA75");
        assert_eq!(scheme.primary_container, "#D4EADC");
        assert_eq!(scheme.secondary, "#8EA3A3");
        assert_eq!(scheme.tertiary, "#FFB74D");
        assert_eq!(scheme.background, "#F7F8F8");
        assert_eq!(scheme.error, "#BA1A1A");
    }

    #[test]
    fn test_dark_scheme_constants() {
        let scheme = dark_scheme();
        assert_eq!(scheme.primary, "#9ACFA0");
        assert_eq!(scheme.primary_container, "#20521C");
        assert_eq!(scheme.background, "#121312");
        assert_eq!(scheme.error, "#FFB4AB");
    }

    #[test]
    fn test_all_roles_valid_hex() {
        for scheme in [light_scheme(), dark_scheme()] {
            for (name, color) in scheme.roles() {
                assert!(
                    parse_hex_color(color).is_some(),
                    "role {} has invalid color {}",
                    name,
                    color
                );
            }
        }
    }

    #[test]
    fn test_scheme_get() {
        let scheme = light_scheme();
        assert_eq!(scheme.get("primary"), Some(&"#6BAA75".to_string()));
        assert_eq!(scheme.get("on_error"), Some(&"#FFFFFF".to_string()));
        assert_eq!(scheme.get("accent"), None);
    }

    #[test]
    fn test_resolve_static_light() {
        // Static palette regardless of platform capability when dynamic
        // color is disabled.
        let palette = test_palette();
        let tokens = resolve_theme(false, false, Some(&palette));
        assert_eq!(tokens.scheme, light_scheme());
        assert_eq!(tokens.source, ThemeSource::StaticPalette);
        assert!(!tokens.dark);
    }

    #[test]
    fn test_resolve_static_dark() {
        let palette = test_palette();
        let tokens = resolve_theme(true, false, Some(&palette));
        assert_eq!(tokens.scheme, dark_scheme());
        assert_eq!(tokens.source, ThemeSource::StaticPalette);
        assert!(tokens.dark);
    }

    #[test]
    fn test_resolve_dynamic_variants() {
        let palette = test_palette();

        let light = resolve_theme(false, true, Some(&palette));
        assert_eq!(light.scheme.primary, "#112233");
        assert_eq!(light.source, ThemeSource::PlatformDynamic);

        let dark = resolve_theme(true, true, Some(&palette));
        assert_eq!(dark.scheme.primary, "#445566");
        assert_eq!(dark.source, ThemeSource::PlatformDynamic);
    }

    #[test]
    fn test_resolve_dynamic_enabled_without_capability() {
        // Enabled but absent capability silently falls back.
        let tokens = resolve_theme(true, true, None);
        assert_eq!(tokens.scheme, dark_scheme());
        assert_eq!(tokens.source, ThemeSource::StaticPalette);
    }

    #[test]
    fn test_typography_and_shapes_independent_of_branch() {
        let palette = test_palette();
        let static_tokens = resolve_theme(false, false, None);
        let dynamic_tokens = resolve_theme(false, true, Some(&palette));
        assert_eq!(static_tokens.typography, dynamic_tokens.typography);
        assert_eq!(static_tokens.shapes, dynamic_tokens.shapes);
    }

    #[test]
    fn test_system_appearance_detect() {
        let appearance = SystemAppearance::detect();
        assert!(!appearance.dark_mode);
        assert!(appearance.dynamic_palette.is_none());

        let tokens = appearance.resolve();
        assert_eq!(tokens.scheme, light_scheme());
    }

    #[test]
    fn test_theme_tokens_serialization() {
        let tokens = resolve_theme(true, false, None);
        let json = serde_json::to_string(&tokens).unwrap();
        let parsed: ThemeTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tokens);
    }

    #[test]
    fn test_text_background_contrast() {
        for scheme in [light_scheme(), dark_scheme()] {
            let bg = parse_hex_color(&scheme.background).unwrap();
            let text = parse_hex_color(&scheme.on_background).unwrap();

            let bg_lum = (bg.0 as u32 + bg.1 as u32 + bg.2 as u32) / 3;
            let text_lum = (text.0 as u32 + text.1 as u32 + text.2 as u32) / 3;
            let diff = bg_lum.abs_diff(text_lum);

            assert!(diff > 100, "insufficient contrast: {}", diff);
        }
    }
}
