use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::shell::use_app_shell;
use crate::views::{FavoritesView, FlashcardsView, HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/flashcards", FlashcardsView)] Flashcards {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/favorites", FavoritesView)] Favorites {},
}

#[component]
fn Layout() -> Element {
    let _ = use_app_shell();
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Header() -> Element {
    rsx! {
        header { class: "header",
            h1 { "FHIR Study" }
            nav { class: "header-nav",
                ul {
                    li { Link { to: Route::Home {}, "Home" } }
                    li { Link { to: Route::Favorites {}, "Favorites" } }
                }
            }
        }
    }
}
