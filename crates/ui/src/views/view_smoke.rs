use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;

use services::{FlashcardSession, QuizSession, StudySetBuilder};
use storage::catalog::{CatalogSource, CatalogSourceError};
use study_core::model::{RecordDraft, Selection};
use study_core::time::fixed_now;

use super::test_harness::{
    SeedSessions, ViewKind, setup_view_harness, setup_view_harness_with_seed,
    setup_view_harness_with_source,
};

async fn drive(harness: &mut super::test_harness::ViewHarness) {
    harness.rebuild();
    for _ in 0..5 {
        harness.drive_async().await;
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_selector_form() {
    let mut harness = setup_view_harness(ViewKind::Home).await;
    drive(&mut harness).await;

    let html = harness.render();
    assert!(html.contains("Create Your Study Set"), "missing title in {html}");
    assert!(html.contains("Start Flashcards"), "missing flashcards CTA in {html}");
    assert!(html.contains("Start Quiz"), "missing quiz CTA in {html}");
    // Categories come from the embedded seed catalog.
    assert!(html.contains("Clinical"), "missing category option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_without_session_points_home() {
    let mut harness = setup_view_harness(ViewKind::Flashcards).await;
    drive(&mut harness).await;

    let html = harness.render();
    assert!(html.contains("No active study session"), "missing empty state in {html}");
    assert!(html.contains("Go Home"), "missing home link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_view_smoke_renders_current_card() {
    let harness = setup_view_harness(ViewKind::Home).await;
    let catalog = harness.services.catalog().load().await.unwrap();
    let mut rng = StdRng::seed_from_u64(51);
    let set = StudySetBuilder::new(&catalog)
        .build_with_rng(&Selection::all(), &mut rng)
        .unwrap();
    let session = FlashcardSession::new(set, fixed_now());
    let front = session.current().name().as_str().to_string();

    let mut harness = setup_view_harness_with_seed(
        ViewKind::Flashcards,
        SeedSessions {
            flashcards: Some(session),
            quiz: None,
        },
    )
    .await;
    drive(&mut harness).await;

    let html = harness.render();
    assert!(html.contains(&front), "missing card front {front} in {html}");
    assert!(html.contains("Progress: 1 /"), "missing progress in {html}");
    assert!(html.contains("(Click to reveal definition)"), "missing hint in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_question_and_options() {
    let harness = setup_view_harness(ViewKind::Home).await;
    let catalog = harness.services.catalog().load().await.unwrap();
    let mut rng = StdRng::seed_from_u64(52);
    let set = StudySetBuilder::new(&catalog)
        .build_with_rng(&Selection::all(), &mut rng)
        .unwrap();
    let session = QuizSession::with_rng(
        set,
        catalog.records().to_vec(),
        fixed_now(),
        StdRng::seed_from_u64(52),
    );
    let question_name = session.current().name().as_str().to_string();
    let option_count = session.options().len();

    let mut harness = setup_view_harness_with_seed(
        ViewKind::Quiz,
        SeedSessions {
            flashcards: None,
            quiz: Some(session),
        },
    )
    .await;
    drive(&mut harness).await;

    let html = harness.render();
    assert!(
        html.contains("Which FHIR resource is described as:"),
        "missing question stem in {html}"
    );
    // The correct record always appears among the options.
    assert!(
        html.contains(&question_name),
        "missing option {question_name} in {html}"
    );
    assert_eq!(option_count, 4, "full catalog should yield four options");
    assert!(html.contains("Score: 0"), "missing score in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn favorites_view_smoke_renders_empty_then_starred() {
    let mut harness = setup_view_harness(ViewKind::Favorites).await;
    drive(&mut harness).await;
    let html = harness.render();
    assert!(html.contains("No Favorite Cards"), "missing empty state in {html}");
    assert!(html.contains("Start Studying"), "missing CTA in {html}");

    // Star one record through the service, then re-render.
    let catalog = harness.services.catalog().load().await.unwrap();
    let starred = catalog.records()[0].clone();
    harness
        .services
        .favorites()
        .toggle(starred.clone())
        .await
        .unwrap();

    drive(&mut harness).await;
    let html = harness.render();
    assert!(
        html.contains(starred.name().as_str()),
        "missing starred record in {html}"
    );
    assert!(html.contains("Clear All"), "missing clear action in {html}");
}

struct FailingSource;

#[async_trait]
impl CatalogSource for FailingSource {
    async fn fetch(&self) -> Result<Vec<RecordDraft>, CatalogSourceError> {
        Err(CatalogSourceError::Unavailable("fail".to_string()))
    }

    fn origin(&self) -> String {
        "failing test source".to_string()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_catalog_error_state() {
    let mut harness = setup_view_harness_with_source(
        ViewKind::Home,
        SeedSessions::default(),
        Arc::new(FailingSource),
    )
    .await;
    drive(&mut harness).await;

    let html = harness.render();
    assert!(
        html.contains("could not be loaded"),
        "missing error message in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}
