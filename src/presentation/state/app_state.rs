use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::GenerationService;
use crate::presentation::config::Settings;

pub struct AppState<F, L: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
{
    pub generation_service: Arc<GenerationService<F, L>>,
    pub settings: Settings,
}

impl<F, L: ?Sized> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            generation_service: Arc::clone(&self.generation_service),
            settings: self.settings.clone(),
        }
    }
}
