//! Design tokens for CareConnect
//!
//! This module provides the design system primitives shared by every
//! screen: spacing, corner radii, component sizing, and font weights.

use serde::{Deserialize, Serialize};

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels, based on a 4px unit
pub mod spacing {
    /// 4px - Extra small
    pub const SPACE_XS: f32 = 4.0;
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 12px - Medium (default gap between stacked cards)
    pub const SPACE_MD: f32 = 12.0;
    /// 16px - Large (default screen padding)
    pub const SPACE_LG: f32 = 16.0;
    /// 24px - Extra large
    pub const SPACE_XL: f32 = 24.0;
    /// 32px - 2x large
    pub const SPACE_2XL: f32 = 32.0;

    /// Get a spacing value by name
    pub fn get(name: &str) -> Option<f32> {
        match name {
            "xs" => Some(SPACE_XS),
            "sm" => Some(SPACE_SM),
            "md" => Some(SPACE_MD),
            "lg" => Some(SPACE_LG),
            "xl" => Some(SPACE_XL),
            "2xl" => Some(SPACE_2XL),
            _ => None,
        }
    }
}

// =============================================================================
// Corner Radius Tokens
// =============================================================================

/// Corner radius tokens
pub mod radius {
    /// No radius (0px)
    pub const NONE: f32 = 0.0;
    /// Small radius (6px) - calendar cells, timeline dots
    pub const SMALL: f32 = 6.0;
    /// Medium radius (12px) - cards
    pub const MEDIUM: f32 = 12.0;
    /// Large radius (16px) - chat bubbles
    pub const LARGE: f32 = 16.0;
    /// Full/pill radius (9999px)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Size tokens for component dimensions
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Small icon (16px)
        pub const SM: f32 = 16.0;
        /// Medium icon (24px) - list rows, rail items
        pub const MD: f32 = 24.0;
        /// Large icon (32px)
        pub const LG: f32 = 32.0;
        /// Profile icon (48px)
        pub const PROFILE: f32 = 48.0;
    }

    /// Navigation rail dimensions
    pub mod rail {
        /// Rail width (72px)
        pub const WIDTH: f32 = 72.0;
    }

    /// Card dimensions
    pub mod card {
        /// Dashboard card height (80px)
        pub const HEIGHT: f32 = 80.0;
    }

    /// Calendar dimensions
    pub mod calendar {
        /// Day cell side length (32px)
        pub const CELL: f32 = 32.0;
    }
}

// =============================================================================
// Border Width Tokens
// =============================================================================

/// Border width tokens
pub mod border {
    /// No border (0px)
    pub const NONE: f32 = 0.0;
    /// Thin border (1px)
    pub const THIN: f32 = 1.0;
    /// Medium border (2px)
    pub const MEDIUM: f32 = 2.0;
}

// =============================================================================
// Font Weight Tokens
// =============================================================================

/// Font weight values
pub mod font_weight {
    /// Normal/Regular (400)
    pub const NORMAL: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

// =============================================================================
// Shape Scale
// =============================================================================

/// The corner radii snapshot carried by a resolved theme.
///
/// Independent of the color branch: every theme pass uses the same
/// gentle rounding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeScale {
    /// Small components (6px)
    pub small: f32,
    /// Medium components such as cards (12px)
    pub medium: f32,
    /// Large components such as chat bubbles (16px)
    pub large: f32,
}

impl Default for ShapeScale {
    fn default() -> Self {
        Self {
            small: radius::SMALL,
            medium: radius::MEDIUM,
            large: radius::LARGE,
        }
    }
}

impl ShapeScale {
    /// Get a radius by size name
    pub fn get(&self, name: &str) -> Option<f32> {
        match name {
            "small" => Some(self.small),
            "medium" => Some(self.medium),
            "large" => Some(self.large),
            _ => None,
        }
    }
}
