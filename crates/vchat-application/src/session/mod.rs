//! Session application services.
//!
//! This module contains the observable share-view state and the hydrator
//! that fills it from the backend.

mod hydrator;
mod state;

pub use hydrator::{HydrationOutcome, SessionHydrator};
pub use state::{ShareViewSnapshot, ShareViewState};
