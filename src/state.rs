//! Application state shared by every transport.
//!
//! Holds the read-only content store, the process-wide index source used for random
//! picks, and the renderer (which carries the character budget). There is no mutable
//! state here: requests are independent and read concurrently without locks.

use std::sync::Arc;

use crate::generate::Generator;
use crate::governor::LengthGovernor;
use crate::render::Renderer;
use crate::select::{IndexSource, Selector};
use crate::store::ContentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ContentStore>,
    pub rng: Arc<dyn IndexSource>,
    pub renderer: Renderer,
}

impl AppState {
    pub fn new(store: Arc<ContentStore>, rng: Arc<dyn IndexSource>, governor: LengthGovernor) -> Self {
        Self { store, rng, renderer: Renderer::new(governor) }
    }

    pub fn selector(&self) -> Selector<'_> {
        Selector::new(&self.store, self.rng.as_ref())
    }

    pub fn generator(&self) -> Generator<'_> {
        Generator::new(self.selector(), self.renderer)
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    let store = ContentStore::seeded().expect("seed data");
    AppState::new(Arc::new(store), Arc::new(crate::select::ThreadRngIndex), LengthGovernor::default())
}
