use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use services::{
    AppServices, FlashcardSession, QuizSession, SessionError, StudySetBuilder,
};
use storage::catalog::{CatalogSource, CatalogSourceError};
use storage::repository::Storage;
use study_core::model::{Catalog, Record, RecordDraft, RecordName, Selection, SelectionFilter};
use study_core::time::fixed_now;

fn record(name: &str, category: &str, sub: &str) -> Record {
    RecordDraft {
        name: name.to_string(),
        definition: format!("{name} definition"),
        category: category.to_string(),
        sub_category: sub.to_string(),
    }
    .validate()
    .unwrap()
}

/// Ten records split across two categories.
fn two_category_catalog() -> Catalog {
    let mut records = Vec::new();
    for i in 0..6 {
        records.push(record(&format!("Alpha{i}"), "A", "One"));
    }
    for i in 0..4 {
        records.push(record(&format!("Beta{i}"), "B", "Two"));
    }
    Catalog::new(records).unwrap()
}

fn category(value: &str) -> Selection {
    Selection::new(SelectionFilter::Only(value.to_string()), SelectionFilter::All)
}

#[test]
fn flashcards_over_a_filtered_set_clamp_at_the_end() {
    let catalog = two_category_catalog();
    let mut rng = StdRng::seed_from_u64(41);

    let set = StudySetBuilder::new(&catalog)
        .build_with_rng(&category("A"), &mut rng)
        .unwrap();
    assert_eq!(set.len(), 6);
    assert!(set.records().iter().all(|r| r.category() == "A"));

    let mut session = FlashcardSession::new(set, fixed_now());
    for _ in 0..9 {
        session.next();
    }
    assert_eq!(session.position(), 5);
    assert!(!session.has_next());
}

#[test]
fn quiz_over_a_two_record_collection_never_fabricates_options() {
    let catalog = Catalog::new(vec![
        record("Patient", "Base", "Individuals"),
        record("Observation", "Clinical", "Diagnostics"),
    ])
    .unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    let set = StudySetBuilder::new(&catalog)
        .build_with_rng(&Selection::all(), &mut rng)
        .unwrap();
    let mut quiz = QuizSession::with_rng(
        set,
        catalog.records().to_vec(),
        fixed_now(),
        StdRng::seed_from_u64(42),
    );

    for _ in 0..2 {
        assert_eq!(quiz.options().len(), 2);
        let correct = quiz.current().name().clone();
        assert!(quiz.answer(correct).unwrap());
        let _ = quiz.advance();
    }
    assert_eq!(quiz.score(), 2);
}

#[test]
fn empty_selection_builds_no_session() {
    let catalog = two_category_catalog();
    let mut rng = StdRng::seed_from_u64(43);

    let selection = Selection::new(
        SelectionFilter::Only("A".to_string()),
        SelectionFilter::Only("Two".to_string()),
    );
    let result = StudySetBuilder::new(&catalog).build_with_rng(&selection, &mut rng);
    assert_eq!(result.unwrap_err(), SessionError::EmptySelection);
}

struct TestCatalogSource(Vec<RecordDraft>);

#[async_trait::async_trait]
impl CatalogSource for TestCatalogSource {
    async fn fetch(&self) -> Result<Vec<RecordDraft>, CatalogSourceError> {
        Ok(self.0.clone())
    }

    fn origin(&self) -> String {
        "test catalog".to_string()
    }
}

#[tokio::test]
async fn starring_during_a_quiz_shows_up_in_favorites_and_unstars_cleanly() {
    let drafts: Vec<RecordDraft> = two_category_catalog()
        .records()
        .iter()
        .map(|r| RecordDraft {
            name: r.name().as_str().to_string(),
            definition: r.definition().to_string(),
            category: r.category().to_string(),
            sub_category: r.sub_category().to_string(),
        })
        .collect();

    let app = AppServices::with_storage(
        Storage::in_memory(),
        Arc::new(TestCatalogSource(drafts)),
    )
    .await
    .unwrap();

    let catalog = app.catalog().load().await.unwrap();
    let mut rng = StdRng::seed_from_u64(44);
    let set = StudySetBuilder::new(&catalog)
        .build_with_rng(&Selection::all(), &mut rng)
        .unwrap();
    let quiz = QuizSession::with_rng(
        set,
        catalog.records().to_vec(),
        fixed_now(),
        StdRng::seed_from_u64(44),
    );

    // Star the current question mid-quiz.
    let favorites = app.favorites();
    let starred = quiz.current().clone();
    favorites.toggle(starred.clone()).await.unwrap();

    // The favorites listing shows exactly that record.
    let listed = favorites.records();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name(), starred.name());

    // Unstarring from the favorites view removes it everywhere.
    favorites.toggle(listed[0].clone()).await.unwrap();
    assert!(!favorites.is_favorite(starred.name()));
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn favorites_survive_a_service_rebuild_over_the_same_store() {
    let storage = Storage::in_memory();
    let source = Arc::new(TestCatalogSource(vec![RecordDraft {
        name: "Patient".to_string(),
        definition: "d".to_string(),
        category: "Base".to_string(),
        sub_category: "Individuals".to_string(),
    }]));

    let app = AppServices::with_storage(storage.clone(), source.clone())
        .await
        .unwrap();
    app.favorites()
        .toggle(record("Patient", "Base", "Individuals"))
        .await
        .unwrap();

    let reopened = AppServices::with_storage(storage, source).await.unwrap();
    assert!(
        reopened
            .favorites()
            .is_favorite(&RecordName::new("Patient").unwrap())
    );
}
