//! Request types for the generation service
//!
//! Field names follow the wire contract of the MindToEye API, which uses
//! camelCase throughout. The generated brand concept itself is deliberately
//! untyped: it is returned as an opaque `serde_json::Value` and forwarded to
//! callers unchanged.

use serde::{Deserialize, Serialize};

/// A single core value attached to a brand brief
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandValue {
    /// Client-assigned identifier for the value entry
    pub id: String,
    /// The value text itself (e.g. "sustainability")
    pub value: String,
}

impl BrandValue {
    /// Create a new brand value entry
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// Supported visual design styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignStyle {
    /// Contemporary, clean look
    Modern,
    /// Traditional, established look
    Classic,
    /// Reduced, whitespace-heavy look
    Minimalist,
    /// High-contrast, attention-grabbing look
    Bold,
}

impl Default for DesignStyle {
    fn default() -> Self {
        DesignStyle::Modern
    }
}

/// Brand parameters submitted to the generation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInput {
    /// Name of the brand (required)
    pub brand_name: String,
    /// Industry the brand operates in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    /// Free-form description of the brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Core values of the brand
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<BrandValue>,
    /// Preferred visual design style
    #[serde(default)]
    pub design_style: DesignStyle,
    /// Preferred colors, as free-form strings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub color_preferences: Vec<String>,
}

impl BrandInput {
    /// Create a new brand brief with the given name and default styling
    pub fn new(brand_name: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            industry: None,
            description: None,
            values: Vec::new(),
            design_style: DesignStyle::default(),
            color_preferences: Vec::new(),
        }
    }

    /// Sets the industry
    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the core values
    pub fn with_values(mut self, values: Vec<BrandValue>) -> Self {
        self.values = values;
        self
    }

    /// Sets the design style
    pub fn with_design_style(mut self, style: DesignStyle) -> Self {
        self.design_style = style;
        self
    }

    /// Sets the color preferences
    pub fn with_color_preferences(mut self, colors: Vec<String>) -> Self {
        self.color_preferences = colors;
        self
    }
}

/// Concept element kinds that can be regenerated individually
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// The color palette
    Colors,
    /// The typography pairing
    Typography,
    /// The logo variants
    Logo,
    /// The tagline
    Tagline,
}

/// Request to regenerate a single element of an existing concept
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateElementRequest {
    /// Identifier of the stored concept to regenerate from
    pub concept_id: i64,
    /// Which element to regenerate
    pub element_type: ElementType,
}

impl RegenerateElementRequest {
    /// Create a new regeneration request
    pub fn new(concept_id: i64, element_type: ElementType) -> Self {
        Self {
            concept_id,
            element_type,
        }
    }
}

/// Error body returned by the API on failed requests
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub error: String,
}
