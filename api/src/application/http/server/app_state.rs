use std::sync::Arc;

use ahara_core::application::AharaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AharaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AharaService) -> Self {
        Self { args, service }
    }
}
