//! Brand concept generation service
//!
//! This module provides the generation API implementation: submitting a
//! brand brief, consuming the streamed generation response with incremental
//! progress reporting, and regenerating individual concept elements.

mod reader;
mod recovery;
mod service;
mod types;
mod validation;


// Re-export public types
pub use types::{
    BrandInput, BrandValue, DesignStyle, ElementType, RegenerateElementRequest,
};

pub use reader::{ProgressCallback, StreamingResultReader};
pub use service::{GenerationService, GenerationServiceImpl};
pub use validation::{validate_brand_input, validate_regenerate_request};
