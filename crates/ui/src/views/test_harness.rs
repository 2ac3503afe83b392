use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use services::{
    AppServices, CatalogService, Clock, FavoritesService, FlashcardSession, QuizSession,
};
use storage::catalog::{CatalogSource, EmbeddedCatalogSource};
use storage::repository::Storage;
use study_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::views::shell::use_app_shell;
use crate::views::{FavoritesView, FlashcardsView, HomeView, QuizView};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<CatalogService>,
    favorites: Arc<FavoritesService>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    fn favorites(&self) -> Arc<FavoritesService> {
        Arc::clone(&self.favorites)
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Flashcards,
    Quiz,
    Favorites,
}

/// Sessions to install into the shell store before the view renders,
/// standing in for the home view's start action.
#[derive(Clone, Default)]
pub struct SeedSessions {
    pub flashcards: Option<FlashcardSession>,
    pub quiz: Option<QuizSession>,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    seed: SeedSessions,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.seed.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let (store, _catalog) = use_app_shell();
    let seed = use_context::<SeedSessions>();
    use_hook(move || {
        if let Some(session) = seed.flashcards.clone() {
            let mut flashcards = store.flashcards;
            flashcards.set(Some(session));
        }
        if let Some(session) = seed.quiz.clone() {
            let mut quiz = store.quiz;
            quiz.set(Some(session));
        }
    });

    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Flashcards => rsx! { FlashcardsView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Favorites => rsx! { FavoritesView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with_seed(view, SeedSessions::default()).await
}

pub async fn setup_view_harness_with_seed(view: ViewKind, seed: SeedSessions) -> ViewHarness {
    setup_view_harness_with_source(view, seed, Arc::new(EmbeddedCatalogSource)).await
}

pub async fn setup_view_harness_with_source(
    view: ViewKind,
    seed: SeedSessions,
    source: Arc<dyn CatalogSource>,
) -> ViewHarness {
    let services = AppServices::with_storage(Storage::in_memory(), source)
        .await
        .expect("build app services");

    let app = Arc::new(TestApp {
        catalog: services.catalog(),
        favorites: services.favorites(),
    });

    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view, seed });

    ViewHarness { dom, services }
}
