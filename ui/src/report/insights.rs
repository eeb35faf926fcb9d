use dioxus::prelude::*;

use crate::report::{ImagePanel, PerformancePanel};
use crate::t;

/// A titled card holding one inlined chart image.
#[component]
pub fn ImageCard(title: String, data_uri: String, width: u32) -> Element {
    rsx! {
        div { class: "dashboard-card dashboard-chart",
            h4 { class: "dashboard-chart__title", "{title}" }
            img { class: "dashboard-chart__image", src: "{data_uri}", width: "{width}", alt: "{title}" }
        }
    }
}

/// Donut chart next to the `project` image panels.
#[component]
pub fn ProjectInsights(performance: PerformancePanel, panels: Vec<ImagePanel>) -> Element {
    rsx! {
        h2 { class: "dashboard-section-title", {t!("section-project")} }
        div { class: "dashboard-row dashboard-row--split",
            ImageCard {
                title: t!("chart-predictive"),
                data_uri: performance.data_uri.clone(),
                width: performance.width,
            }
            for panel in panels.iter() {
                ImageCard {
                    key: "{panel.title}",
                    title: panel.title.clone(),
                    data_uri: panel.data_uri.clone(),
                    width: panel.width,
                }
            }
        }
    }
}

#[component]
pub fn AdditionalInsights(panels: Vec<ImagePanel>) -> Element {
    if panels.is_empty() {
        return rsx! {};
    }

    rsx! {
        h2 { class: "dashboard-section-title", {t!("section-additional")} }
        div { class: "dashboard-row dashboard-row--split",
            for panel in panels.iter() {
                ImageCard {
                    key: "{panel.title}",
                    title: panel.title.clone(),
                    data_uri: panel.data_uri.clone(),
                    width: panel.width,
                }
            }
        }
    }
}

/// Full-width charts at the bottom of the dashboard.
#[component]
pub fn FullWidthPanels(panels: Vec<ImagePanel>) -> Element {
    rsx! {
        for panel in panels.iter() {
            div { key: "{panel.title}", class: "dashboard-row dashboard-row--full",
                ImageCard {
                    title: panel.title.clone(),
                    data_uri: panel.data_uri.clone(),
                    width: panel.width,
                }
            }
        }
    }
}
