//! HTTP bindings for the external collaborators.
//!
//! These are the shipped production implementations of the engine
//! seams that live behind remote services; in tests the orchestrator
//! runs against in-process doubles instead.

pub mod places;
pub mod translate;

pub use places::PlacesClient;
pub use translate::HttpTranslator;
