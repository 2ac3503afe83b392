use dioxus::prelude::*;
use dioxus_router::Link;

use study_core::model::Record;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::shell::SessionStore;

/// Star toggle for a record, shown in flashcards, quiz, and favorites.
///
/// The toggle persists synchronously relative to the mutation, then notifies
/// the session store so every view showing a star re-renders.
#[component]
pub(crate) fn StarButton(record: Record) -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_context::<SessionStore>();
    store.watch_favorites();

    let starred = ctx.favorites().is_favorite(record.name());
    let class = if starred { "star star--on" } else { "star" };
    let label = if starred { "★" } else { "☆" };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            aria_pressed: "{starred}",
            aria_label: "Toggle favorite",
            onclick: move |_| {
                let favorites = ctx.favorites();
                let record = record.clone();
                spawn(async move {
                    if favorites.toggle(record).await.is_ok() {
                        store.notify_favorites_changed();
                    }
                });
            },
            "{label}"
        }
    }
}

/// Shown when flashcards or quiz are opened without a built study set.
#[component]
pub(crate) fn NoActiveSession() -> Element {
    rsx! {
        div { class: "empty-state",
            h3 { "No active study session" }
            p { "Pick a category on the home screen to start studying." }
            Link { to: Route::Home {}, class: "btn btn-primary", "Go Home" }
        }
    }
}

/// Progress bar for the position within a study set.
#[component]
pub(crate) fn ProgressBar(position: usize, total: usize, variant: &'static str) -> Element {
    let percent = if total == 0 {
        0
    } else {
        ((position + 1) * 100) / total
    };
    rsx! {
        div { class: "progress-track",
            div {
                class: "progress-fill progress-fill--{variant}",
                style: "width: {percent}%",
            }
        }
    }
}
