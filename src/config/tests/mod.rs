//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token, event, and API URL resolution tests
//! - `label_inputs`: Label name resolution and action input fallbacks

mod helpers;
