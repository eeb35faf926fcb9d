//! Page-level components. [`SessionGate`] picks the page from the session mode.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::{
    config::DashboardConfig,
    extract::OkrExtractor,
    session::{Mode, Session},
};

mod dashboard;
pub use dashboard::{DashboardBody, DashboardPage, RenderErrorCard};

mod upload;
pub use upload::UploadPage;

/// Read-only services shared with every page through the Dioxus context.
///
/// The mutable [`Session`] travels separately as a `Signal<Session>`.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<DashboardConfig>,
    pub extractor: Rc<dyn OkrExtractor>,
}

impl AppContext {
    pub fn new(config: DashboardConfig, extractor: impl OkrExtractor + 'static) -> Self {
        Self {
            config: Rc::new(config),
            extractor: Rc::new(extractor),
        }
    }
}

#[component]
pub fn SessionGate() -> Element {
    let session = use_context::<Signal<Session>>();
    let mode = session.read().mode();

    match mode {
        Mode::Upload => rsx! { UploadPage {} },
        Mode::Dashboard => rsx! { DashboardPage {} },
    }
}
