use dioxus::prelude::*;

use study_core::model::{Record, RecordName};

use crate::views::components::{NoActiveSession, ProgressBar, StarButton};
use crate::views::shell::SessionStore;

#[component]
pub fn QuizView() -> Element {
    let store = use_context::<SessionStore>();
    let mut quiz = store.quiz;

    let answer = use_callback(move |choice: RecordName| {
        if let Some(session) = quiz.write().as_mut() {
            // A second submission for the same question is rejected by the
            // session; the buttons are disabled by then anyway.
            let _ = session.answer(choice);
        }
    });

    let advance = use_callback(move |()| {
        if let Some(session) = quiz.write().as_mut() {
            let _ = session.advance();
        }
    });

    let guard = quiz.read();
    let Some(session) = guard.as_ref() else {
        drop(guard);
        return rsx! { NoActiveSession {} };
    };

    let question = session.current().clone();
    let options = session.options().to_vec();
    let result_shown = session.result_shown();
    let selected = session.selected().cloned();
    let score = session.score();
    let position = session.position();
    let total = session.total();
    let has_next = session.has_next();
    drop(guard);

    rsx! {
        div { class: "page quiz-page",
            div { class: "quiz-status",
                p { "Question: {position + 1} / {total}" }
                p { class: "quiz-score", "Score: {score}" }
            }
            ProgressBar { position, total, variant: "quiz" }

            div { class: "card quiz-card",
                div { class: "quiz-question",
                    p {
                        "Which FHIR resource is described as:"
                        br {}
                        strong { "\"{question.definition()}\"" }
                    }
                    StarButton { record: question.clone() }
                }

                div { class: "quiz-options",
                    for option in options {
                        QuizOption {
                            option: option.clone(),
                            correct: option.name() == question.name(),
                            chosen: selected.as_ref() == Some(option.name()),
                            result_shown,
                            on_select: answer,
                        }
                    }
                }

                if result_shown {
                    div { class: "quiz-next",
                        button {
                            class: "btn btn-primary",
                            id: "quiz-next",
                            r#type: "button",
                            disabled: !has_next,
                            onclick: move |_| advance.call(()),
                            "Next Question"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuizOption(
    option: Record,
    correct: bool,
    chosen: bool,
    result_shown: bool,
    on_select: EventHandler<RecordName>,
) -> Element {
    let class = if result_shown {
        if correct {
            "quiz-option quiz-option--correct"
        } else if chosen {
            "quiz-option quiz-option--wrong"
        } else {
            "quiz-option"
        }
    } else {
        "quiz-option"
    };
    let name = option.name().clone();

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: result_shown,
            onclick: move |_| on_select.call(name.clone()),
            "{option.name()}"
        }
    }
}
