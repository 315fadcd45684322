//! Filter edits and their encodings.
//!
//! - [`edit`] — typed single-field edits and the pure state transition.
//! - [`form`] — turns raw form text into edits.
//! - [`query`] — encodes a filter state as service query parameters.

pub mod edit;
pub mod form;
pub mod query;

pub use edit::FilterEdit;
pub use form::FilterField;
