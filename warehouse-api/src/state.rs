use std::sync::Arc;

use warehouse_store::Warehouse;

#[derive(Clone)]
pub struct AppState {
    pub warehouse: Arc<Warehouse>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            warehouse: Arc::new(Warehouse::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
