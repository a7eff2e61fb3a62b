use std::sync::Arc;

use ecoreveal_core::application::EcoRevealService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: EcoRevealService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: EcoRevealService) -> Self {
        Self { args, service }
    }
}
