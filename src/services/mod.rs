//! Service modules for the MindToEye API

pub mod generation;
pub mod health;
