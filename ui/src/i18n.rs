//! Localization for `okrboard-ui`.
//!
//! Built on `i18n-embed` (language selection + asset loading), `fluent`
//! (message formatting), `rust-embed` (the `.ftl` files are compiled in) and
//! `i18n-embed-fl` (the `fl!` macro checks keys against the fallback file at
//! compile time).
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/okrboard-ui.ftl   (fallback/reference)
//!   ko-KR/okrboard-ui.ftl
//! ```
//!
//! Call [`init`] once before rendering; it is idempotent. Components look up
//! strings with the crate-level `t!` macro:
//!
//! ```ignore
//! let heading = crate::t!("upload-title");
//! let done = crate::t!("upload-success", name = file_name);
//! ```
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation lookup routed through the shared [`LOADER`].
///
/// ```ignore
/// t!("section-team")
/// t!("upload-selected", name = "plan.pdf")
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`.
const DOMAIN: &str = "okrboard-ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().expect("valid fallback language identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the OS-requested languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = i18n_embed::DesktopLanguageRequester::requested_languages();
        match i18n_embed::select(&*LOADER, &Localizations, &requested) {
            Ok(selected) => tracing::debug!(?selected, "localization bundles loaded"),
            Err(err) => {
                tracing::warn!(%err, "failed selecting languages; continuing with fallback")
            }
        }
    });
}

/// Switch language at runtime. Unparseable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        tracing::debug!(tag, "ignoring unparseable language tag");
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language strings are currently looked up in.
pub fn current_language() -> String {
    LOADER
        .current_languages()
        .first()
        .map(|lang| lang.to_string())
        .unwrap_or_else(|| LOADER.fallback_language().to_string())
}

/// Embedded language identifiers, sorted (for the locale picker).
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_and_korean_are_embedded() {
        let langs = available_languages();
        assert!(langs.iter().any(|l| l == "en-US"));
        assert!(langs.iter().any(|l| l == "ko-KR"));
    }

    #[test]
    fn current_language_follows_switches_and_ignores_invalid_tags() {
        init();
        set_language("ko-KR").unwrap();
        assert_eq!(current_language(), "ko-KR");
        let korean = fl!(&*LOADER, "section-team");

        let _ = set_language("not a language tag");
        assert_eq!(current_language(), "ko-KR");
        assert_eq!(fl!(&*LOADER, "section-team"), korean);

        set_language("en-US").unwrap();
        assert_eq!(current_language(), "en-US");
        assert_eq!(fl!(&*LOADER, "section-team"), "Team Members");
    }
}
