use dioxus::prelude::*;
use dioxus_router::Link;

use study_core::model::Record;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::StarButton;
use crate::views::shell::SessionStore;

#[component]
pub fn FavoritesView() -> Element {
    let ctx = use_context::<AppContext>();
    let store = use_context::<SessionStore>();
    store.watch_favorites();

    let records = ctx.favorites().records();

    let clear_all = use_callback(move |()| {
        let favorites = ctx.favorites();
        spawn(async move {
            if favorites.clear().await.is_ok() {
                store.notify_favorites_changed();
            }
        });
    });

    if records.is_empty() {
        return rsx! {
            div { class: "empty-state",
                h3 { "No Favorite Cards" }
                p {
                    "You haven't starred any cards yet. Star cards during your \
                     study sessions to review them here."
                }
                Link { to: Route::Home {}, class: "btn btn-primary", "Start Studying" }
            }
        };
    }

    rsx! {
        div { class: "page favorites-page",
            div { class: "favorites-header",
                h2 { "Your Favorite Cards" }
                button {
                    class: "btn btn-secondary",
                    id: "favorites-clear",
                    r#type: "button",
                    onclick: move |_| clear_all.call(()),
                    "Clear All"
                }
            }
            div { class: "favorites-grid",
                for record in records {
                    FavoriteCard { record }
                }
            }
        }
    }
}

#[component]
fn FavoriteCard(record: Record) -> Element {
    rsx! {
        div { class: "card favorite-card",
            div {
                h3 { "{record.name()}" }
                p { class: "favorite-definition", "{record.definition()}" }
            }
            div { class: "favorite-footer",
                p { class: "favorite-category",
                    "{record.category()} > {record.sub_category()}"
                }
                StarButton { record: record.clone() }
            }
        }
    }
}
