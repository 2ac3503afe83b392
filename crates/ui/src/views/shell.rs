use std::sync::Arc;

use dioxus::prelude::*;

use services::{CatalogLoadError, FlashcardSession, QuizSession};
use study_core::model::Catalog;

use crate::context::AppContext;
use crate::views::state::ViewError;

/// The catalog loads once per app start; every view derives its loading /
/// error / ready state from this shared resource.
pub type CatalogResource = Resource<Result<Arc<Catalog>, ViewError>>;

/// Shared session state owned by the layout shell.
///
/// All mutations go through named actions (start from home, navigation
/// clearing, flashcard/quiz transitions); views never assign ambient state.
#[derive(Clone, Copy)]
pub struct SessionStore {
    pub flashcards: Signal<Option<FlashcardSession>>,
    pub quiz: Signal<Option<QuizSession>>,
    favorites_version: Signal<u32>,
}

impl SessionStore {
    /// Discard any session in progress (returning home does this).
    pub fn clear_sessions(mut self) {
        self.flashcards.set(None);
        self.quiz.set(None);
    }

    /// Subscribe the calling component to favorites changes.
    pub fn watch_favorites(self) {
        let _ = (self.favorites_version)();
    }

    /// Signal that the favorites set changed so watching views re-render.
    pub fn notify_favorites_changed(mut self) {
        let next = self.favorites_version.peek().wrapping_add(1);
        self.favorites_version.set(next);
    }
}

/// Provide the session store and the shared catalog resource to the view
/// tree. Called once from the routing layout (and mirrored by the test
/// harness).
pub fn use_app_shell() -> (SessionStore, CatalogResource) {
    let ctx = use_context::<AppContext>();

    let store = use_context_provider(|| SessionStore {
        flashcards: Signal::new(None),
        quiz: Signal::new(None),
        favorites_version: Signal::new(0),
    });

    let catalog_service = ctx.catalog();
    let resource: CatalogResource = use_resource(move || {
        let catalog_service = Arc::clone(&catalog_service);
        async move {
            catalog_service.load().await.map_err(|err| match err {
                CatalogLoadError::Source(_) => ViewError::CatalogUnavailable,
                _ => ViewError::Unknown,
            })
        }
    });
    use_context_provider(|| resource);

    (store, resource)
}
