#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use ui::components::AppHeader;
use ui::core::{config::DashboardConfig, extract::CommandExtractor, session::Session};
use ui::views::{AppContext, SessionGate};

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme (ui/assets/theme/main.css), always inlined.

fn main() {
    init_logging();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("OKR Board – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = tracing_subscriber::fmt().with_env_filter(filter).try_init() {
        eprintln!("logging already initialised: {err}");
    }
}

fn load_config() -> DashboardConfig {
    DashboardConfig::load().unwrap_or_else(|err| {
        tracing::error!(%err, "invalid dashboard config; using embedded defaults");
        DashboardConfig::default()
    })
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    use_context_provider(|| {
        let config = load_config();
        let extractor = CommandExtractor::from_config(&config.extraction);
        AppContext::new(config, extractor)
    });
    let session = use_signal(Session::new);
    use_context_provider(|| session);

    // AppHeader updates this on language selection; keying the page tree by it
    // forces a full remount with the new strings.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Style { "{MAIN_CSS_INLINE}" }

        AppHeader {}
        div {
            key: "{lang_code()}",
            main { class: "app-main", SessionGate {} }
        }
    }
}
