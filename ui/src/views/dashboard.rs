use dioxus::prelude::*;

use crate::core::{config::PanelSection, session::Session};
use crate::report::{
    self, AdditionalInsights, DashboardLayout, FullWidthPanels, HeaderPanels, ProjectInsights,
    TeamMembersRow,
};
use crate::t;
use crate::views::AppContext;

/// Dashboard screen. Runs a full render pass on every render of this component.
#[component]
pub fn DashboardPage() -> Element {
    let ctx = use_context::<AppContext>();
    let session = use_context::<Signal<Session>>();
    let snapshot = session.read().clone();

    let uploaded_name = snapshot
        .uploaded_file_path()
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned());

    let body = match report::render(&snapshot, &ctx.config, ctx.extractor.as_ref()) {
        Ok(layout) => rsx! { DashboardBody { layout } },
        Err(err) => {
            tracing::error!(%err, "dashboard render failed");
            rsx! { RenderErrorCard { message: err.to_string() } }
        }
    };

    rsx! {
        section { class: "page page-dashboard",
            h1 { {t!("dashboard-title")} }
            if let Some(name) = uploaded_name {
                p { class: "dashboard__notice", {t!("upload-success", name = name)} }
            }
            {body}
        }
    }
}

#[component]
pub fn DashboardBody(layout: DashboardLayout) -> Element {
    rsx! {
        HeaderPanels { header: layout.header.clone() }
        TeamMembersRow { members: layout.members.clone() }
        ProjectInsights {
            performance: layout.performance.clone(),
            panels: layout.panels_in(PanelSection::Project),
        }
        AdditionalInsights { panels: layout.panels_in(PanelSection::Additional) }
        FullWidthPanels { panels: layout.panels_in(PanelSection::Full) }
    }
}

#[component]
pub fn RenderErrorCard(message: String) -> Element {
    rsx! {
        section { class: "dashboard-card dashboard-error", role: "alert",
            h2 { {t!("dashboard-error-title")} }
            p { class: "dashboard-error__message", "{message}" }
            p { class: "dashboard-error__hint", {t!("dashboard-error-hint")} }
        }
    }
}
