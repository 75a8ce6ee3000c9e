//! Typography system for CareConnect
//!
//! A Material-style role grid (display, headline, title, body, label,
//! each in large/medium/small) resolved into concrete text styles.
//! Larger-than-usual body sizes keep text readable for elderly users.

use crate::tokens::font_weight;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Line height in pixels
    pub line_height: f32,
    /// Font weight (400, 500, 700)
    pub weight: u16,
}

impl TextStyle {
    /// Create a new text style
    pub fn new(size: f32, line_height: f32, weight: u16) -> Self {
        Self {
            size,
            line_height,
            weight,
        }
    }

    /// Multiply size and line height by an accessibility scale factor
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            size: self.size * factor,
            line_height: self.line_height * factor,
            weight: self.weight,
        }
    }
}

// =============================================================================
// Type Roles
// =============================================================================

/// Typography role identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TypeRole {
    /// Display large (57px)
    DisplayLarge,
    /// Display medium (45px)
    DisplayMedium,
    /// Display small (36px)
    DisplaySmall,
    /// Headline large (32px)
    HeadlineLarge,
    /// Headline medium (28px) - screen titles
    HeadlineMedium,
    /// Headline small (24px)
    HeadlineSmall,
    /// Title large (22px)
    TitleLarge,
    /// Title medium (16px) - card titles
    TitleMedium,
    /// Title small (14px)
    TitleSmall,
    /// Body large (18px)
    BodyLarge,
    /// Body medium (14px) - default reading text
    #[default]
    BodyMedium,
    /// Body small (12px)
    BodySmall,
    /// Label large (14px)
    LabelLarge,
    /// Label medium (12px) - timestamps, journal dates
    LabelMedium,
    /// Label small (11px)
    LabelSmall,
}

impl TypeRole {
    /// All roles in scale order
    pub fn all() -> [TypeRole; 15] {
        use TypeRole::*;
        [
            DisplayLarge,
            DisplayMedium,
            DisplaySmall,
            HeadlineLarge,
            HeadlineMedium,
            HeadlineSmall,
            TitleLarge,
            TitleMedium,
            TitleSmall,
            BodyLarge,
            BodyMedium,
            BodySmall,
            LabelLarge,
            LabelMedium,
            LabelSmall,
        ]
    }

    /// The base (unscaled) text style for this role
    pub fn style(&self) -> TextStyle {
        match self {
            Self::DisplayLarge => TextStyle::new(57.0, 64.0, font_weight::NORMAL),
            Self::DisplayMedium => TextStyle::new(45.0, 52.0, font_weight::NORMAL),
            Self::DisplaySmall => TextStyle::new(36.0, 44.0, font_weight::NORMAL),
            Self::HeadlineLarge => TextStyle::new(32.0, 40.0, font_weight::NORMAL),
            Self::HeadlineMedium => TextStyle::new(28.0, 36.0, font_weight::NORMAL),
            Self::HeadlineSmall => TextStyle::new(24.0, 32.0, font_weight::NORMAL),
            Self::TitleLarge => TextStyle::new(22.0, 28.0, font_weight::BOLD),
            Self::TitleMedium => TextStyle::new(16.0, 24.0, font_weight::MEDIUM),
            Self::TitleSmall => TextStyle::new(14.0, 20.0, font_weight::MEDIUM),
            Self::BodyLarge => TextStyle::new(18.0, 24.0, font_weight::NORMAL),
            Self::BodyMedium => TextStyle::new(14.0, 20.0, font_weight::NORMAL),
            Self::BodySmall => TextStyle::new(12.0, 16.0, font_weight::NORMAL),
            Self::LabelLarge => TextStyle::new(14.0, 20.0, font_weight::MEDIUM),
            Self::LabelMedium => TextStyle::new(12.0, 16.0, font_weight::MEDIUM),
            Self::LabelSmall => TextStyle::new(11.0, 16.0, font_weight::MEDIUM),
        }
    }
}

// =============================================================================
// Type Scale
// =============================================================================

/// The complete resolved typography grid for one theme pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    /// Accessibility font scale multiplier
    pub scale: f32,
    /// Resolved styles per role
    pub styles: HashMap<TypeRole, TextStyle>,
}

impl Default for TypeScale {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl TypeScale {
    /// Build the grid at the given scale (clamped 0.8 - 1.4)
    pub fn new(scale: f32) -> Self {
        let scale = scale.clamp(0.8, 1.4);
        let styles = TypeRole::all()
            .iter()
            .map(|role| (*role, role.style().scaled(scale)))
            .collect();
        Self { scale, styles }
    }

    /// Get the resolved style for a role
    pub fn get(&self, role: TypeRole) -> &TextStyle {
        // All roles are inserted at construction.
        &self.styles[&role]
    }

    /// Rebuild the grid at a new scale
    pub fn set_scale(&mut self, scale: f32) {
        let clamped = scale.clamp(0.8, 1.4);
        if (clamped - self.scale).abs() > f32::EPSILON {
            *self = Self::new(clamped);
        }
    }

    /// Current scale multiplier
    pub fn current_scale(&self) -> f32 {
        self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_metrics_match_design() {
        let headline = TypeRole::HeadlineMedium.style();
        assert_eq!(headline.size, 28.0);
        assert_eq!(headline.line_height, 36.0);
        assert_eq!(headline.weight, 400);

        let title = TypeRole::TitleMedium.style();
        assert_eq!(title.size, 16.0);
        assert_eq!(title.weight, 500);

        let title_lg = TypeRole::TitleLarge.style();
        assert_eq!(title_lg.weight, 700);

        let body = TypeRole::BodyMedium.style();
        assert_eq!(body.size, 14.0);
        assert_eq!(body.line_height, 20.0);

        let label = TypeRole::LabelSmall.style();
        assert_eq!(label.size, 11.0);
        assert_eq!(label.weight, 500);
    }

    #[test]
    fn test_sizes_descend_within_role() {
        assert!(TypeRole::DisplayLarge.style().size > TypeRole::DisplayMedium.style().size);
        assert!(TypeRole::DisplayMedium.style().size > TypeRole::DisplaySmall.style().size);
        assert!(TypeRole::HeadlineLarge.style().size > TypeRole::HeadlineSmall.style().size);
        assert!(TypeRole::TitleLarge.style().size > TypeRole::TitleSmall.style().size);
        assert!(TypeRole::BodyLarge.style().size > TypeRole::BodySmall.style().size);
        assert!(TypeRole::LabelLarge.style().size > TypeRole::LabelSmall.style().size);
    }

    #[test]
    fn test_text_style_scaled() {
        let style = TextStyle::new(16.0, 24.0, 500);
        let scaled = style.scaled(1.25);
        assert_eq!(scaled.size, 20.0);
        assert_eq!(scaled.line_height, 30.0);
        assert_eq!(scaled.weight, 500); // weight unchanged
    }

    #[test]
    fn test_type_scale_default() {
        let scale = TypeScale::default();
        assert_eq!(scale.current_scale(), 1.0);
        assert_eq!(scale.styles.len(), TypeRole::all().len());
        assert_eq!(scale.get(TypeRole::BodyMedium).size, 14.0);
    }

    #[test]
    fn test_type_scale_rescale() {
        let mut scale = TypeScale::new(1.0);
        scale.set_scale(1.2);
        assert_eq!(scale.current_scale(), 1.2);
        assert_eq!(scale.get(TypeRole::BodyMedium).size, 14.0 * 1.2);
    }

    #[test]
    fn test_type_scale_clamping() {
        let mut scale = TypeScale::default();
        scale.set_scale(0.5);
        assert_eq!(scale.current_scale(), 0.8);
        scale.set_scale(2.0);
        assert_eq!(scale.current_scale(), 1.4);
    }

    #[test]
    fn test_type_role_serialization() {
        let role = TypeRole::HeadlineMedium;
        let json = serde_json::to_string(&role).unwrap();
        assert_eq!(json, "\"headline-medium\"");
        let parsed: TypeRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, role);
    }

    #[test]
    fn test_type_scale_serialization() {
        let scale = TypeScale::default();
        let json = serde_json::to_string(&scale).unwrap();
        let parsed: TypeScale = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, scale);
    }
}
