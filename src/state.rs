use std::sync::Arc;

use crate::store::BookingStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookingStore>,
}

impl AppState {
    pub fn new(store: impl BookingStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
