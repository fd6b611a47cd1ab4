use std::sync::Arc;

use woltie_core::application::WoltieService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: WoltieService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: WoltieService) -> Self {
        Self { args, service }
    }
}
