use dioxus::prelude::*;

use crate::report::HeaderPanel;
use crate::t;

#[component]
pub fn HeaderPanels(header: HeaderPanel) -> Element {
    let okr = &header.okr;
    let key_result_labels = [
        t!("okr-key-result-1"),
        t!("okr-key-result-2"),
        t!("okr-key-result-3"),
    ];

    rsx! {
        div { class: "dashboard-header",
            section { class: "dashboard-card dashboard-header__document",
                div { class: "dashboard-card__title",
                    span { class: "dashboard-card__label", {t!("header-title")} }
                    " "
                    span { class: "dashboard-header__title", "{header.title}" }
                }
                p {
                    strong { {t!("header-content")} }
                    " "
                    span { class: "dashboard-header__content", "{okr.content}" }
                }
            }
            section { class: "dashboard-card dashboard-header__okr",
                div { class: "dashboard-card__title", {t!("okr-heading")} }
                p {
                    strong { {t!("okr-objective")} }
                    " "
                    span { class: "dashboard-header__objective", "{okr.objective}" }
                }
                for (label, value) in key_result_labels.iter().zip(okr.key_results()) {
                    p {
                        strong { "{label}" }
                        " "
                        span { class: "dashboard-header__key-result", "{value}" }
                    }
                }
            }
        }
    }
}
