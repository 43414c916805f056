use std::sync::Arc;

use foodlens_core::application::FoodLensService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodLensService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodLensService) -> Self {
        Self { args, service }
    }
}
