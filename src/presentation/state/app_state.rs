use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::CritiqueService;
use crate::presentation::config::Settings;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub critique_service: Arc<CritiqueService<F, L>>,
    pub settings: Arc<Settings>,
}

impl<F, L> AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(critique_service: CritiqueService<F, L>, settings: Settings) -> Self {
        Self {
            critique_service: Arc::new(critique_service),
            settings: Arc::new(settings),
        }
    }
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            critique_service: Arc::clone(&self.critique_service),
            settings: Arc::clone(&self.settings),
        }
    }
}
