use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::{FlashcardSession, QuizSession, StudySetBuilder};
use study_core::model::{Selection, SelectionFilter};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::shell::{CatalogResource, SessionStore};
use crate::views::state::{ViewState, view_state_from_resource};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum StudyMode {
    Flashcards,
    Quiz,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let store = use_context::<SessionStore>();
    let catalog_resource = use_context::<CatalogResource>();

    let mut selected_category = use_signal(|| SelectionFilter::WILDCARD.to_string());
    let mut selected_sub = use_signal(|| SelectionFilter::WILDCARD.to_string());
    let mut notice = use_signal(|| None::<&'static str>);

    // Returning home discards any session in progress.
    use_effect(move || {
        store.clear_sessions();
    });

    let start = use_callback(move |mode: StudyMode| {
        let ViewState::Ready(catalog) = view_state_from_resource(catalog_resource) else {
            return;
        };

        let selection = Selection::new(
            SelectionFilter::from_choice(&selected_category()),
            SelectionFilter::from_choice(&selected_sub()),
        );

        match StudySetBuilder::new(&catalog).build(&selection) {
            Ok(set) => {
                notice.set(None);
                let now = ctx.clock().now();
                match mode {
                    StudyMode::Flashcards => {
                        let mut flashcards = store.flashcards;
                        flashcards.set(Some(FlashcardSession::new(set, now)));
                        let _ = navigator.push(Route::Flashcards {});
                    }
                    StudyMode::Quiz => {
                        let mut quiz = store.quiz;
                        quiz.set(Some(QuizSession::new(set, catalog.records().to_vec(), now)));
                        let _ = navigator.push(Route::Quiz {});
                    }
                }
            }
            Err(_) => {
                // Stay on the selection screen; no session state is left behind.
                notice.set(Some(
                    "No records match the selected filters. Broaden your selection.",
                ));
            }
        }
    });

    let body = match view_state_from_resource(catalog_resource) {
        ViewState::Idle | ViewState::Loading => rsx! {
            p { class: "loading", "Loading resources..." }
        },
        ViewState::Error(err) => rsx! {
            div { class: "error-state",
                p { class: "error", "{err.message()}" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let mut resource = catalog_resource;
                        resource.restart();
                    },
                    "Retry"
                }
            }
        },
        ViewState::Ready(catalog) => {
            let categories = catalog.categories();
            let category_is_wildcard = selected_category() == SelectionFilter::WILDCARD;
            let sub_categories = if category_is_wildcard {
                Vec::new()
            } else {
                catalog.sub_categories(&selected_category())
            };

            rsx! {
                div { class: "card selector-card",
                    h2 { "Create Your Study Set" }
                    p { class: "selector-hint",
                        "Select a category and sub-category to focus your study session."
                    }

                    if let Some(message) = notice() {
                        p { class: "notice", role: "alert", "{message}" }
                    }

                    div { class: "selector-fields",
                        div { class: "selector-field",
                            label { r#for: "category", "Category" }
                            select {
                                id: "category",
                                value: "{selected_category}",
                                onchange: move |evt| {
                                    selected_category.set(evt.value());
                                    // Sub-category choices only make sense within the
                                    // chosen category.
                                    selected_sub.set(SelectionFilter::WILDCARD.to_string());
                                },
                                option { value: SelectionFilter::WILDCARD, "All" }
                                for category in categories {
                                    option { value: "{category}", "{category}" }
                                }
                            }
                        }
                        div { class: "selector-field",
                            label { r#for: "sub-category", "Sub-Category" }
                            select {
                                id: "sub-category",
                                value: "{selected_sub}",
                                disabled: category_is_wildcard,
                                onchange: move |evt| selected_sub.set(evt.value()),
                                option { value: SelectionFilter::WILDCARD, "All" }
                                for sub in sub_categories {
                                    option { value: "{sub}", "{sub}" }
                                }
                            }
                        }
                    }

                    div { class: "selector-actions",
                        button {
                            class: "btn btn-primary",
                            id: "start-flashcards",
                            r#type: "button",
                            onclick: move |_| start.call(StudyMode::Flashcards),
                            "Start Flashcards"
                        }
                        button {
                            class: "btn btn-success",
                            id: "start-quiz",
                            r#type: "button",
                            onclick: move |_| start.call(StudyMode::Quiz),
                            "Start Quiz"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        div { class: "page home-page", {body} }
    }
}
