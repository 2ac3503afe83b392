use dioxus::prelude::*;

use crate::views::components::{NoActiveSession, ProgressBar, StarButton};
use crate::views::shell::SessionStore;

#[component]
pub fn FlashcardsView() -> Element {
    let store = use_context::<SessionStore>();
    let mut flashcards = store.flashcards;

    let guard = flashcards.read();
    let Some(session) = guard.as_ref() else {
        drop(guard);
        return rsx! { NoActiveSession {} };
    };

    let record = session.current().clone();
    let flipped = session.is_flipped();
    let position = session.position();
    let total = session.total();
    let has_prev = session.has_prev();
    let has_next = session.has_next();
    drop(guard);

    let card_class = if flipped {
        "flashcard flashcard--flipped"
    } else {
        "flashcard"
    };

    rsx! {
        div { class: "page flashcards-page",
            p { class: "progress-label", "Progress: {position + 1} / {total}" }
            ProgressBar { position, total, variant: "flashcards" }

            div {
                class: "{card_class}",
                id: "flashcard",
                onclick: move |_| {
                    if let Some(session) = flashcards.write().as_mut() {
                        session.flip();
                    }
                },
                if flipped {
                    div { class: "flashcard-face flashcard-face--back",
                        h3 { "{record.name()}" }
                        p { class: "flashcard-definition", "{record.definition()}" }
                        p { class: "flashcard-category",
                            "Category: {record.category()} > {record.sub_category()}"
                        }
                    }
                } else {
                    div { class: "flashcard-face flashcard-face--front",
                        h2 { "{record.name()}" }
                        p { class: "flashcard-hint", "(Click to reveal definition)" }
                    }
                }
            }

            div { class: "flashcard-controls",
                button {
                    class: "btn btn-secondary",
                    id: "flashcards-prev",
                    r#type: "button",
                    disabled: !has_prev,
                    onclick: move |_| {
                        if let Some(session) = flashcards.write().as_mut() {
                            session.prev();
                        }
                    },
                    "Prev"
                }
                StarButton { record: record.clone() }
                button {
                    class: "btn btn-primary",
                    id: "flashcards-next",
                    r#type: "button",
                    disabled: !has_next,
                    onclick: move |_| {
                        if let Some(session) = flashcards.write().as_mut() {
                            session.next();
                        }
                    },
                    "Next"
                }
            }
        }
    }
}
