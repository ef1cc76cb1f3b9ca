use std::sync::Arc;

use lunchpick_core::application::LunchpickService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: LunchpickService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: LunchpickService) -> Self {
        Self { args, service }
    }
}
