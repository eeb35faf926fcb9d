use dioxus::prelude::*;

use crate::core::{
    error::UploadError,
    session::Session,
    storage::{UploadedFile, ALLOWED_EXTENSIONS},
};
use crate::t;
use crate::views::AppContext;

#[derive(Clone, Debug, PartialEq)]
enum UploadFeedback {
    Warning(String),
    Error(String),
}

/// File picker state. Only the most recent pick may complete; a read that
/// finishes after a newer pick started is discarded.
#[derive(Clone, Debug, Default, PartialEq)]
struct PickState {
    pending: Option<String>,
    picked: Option<UploadedFile>,
}

impl PickState {
    fn begin(&mut self, name: &str) {
        self.pending = Some(name.to_string());
        self.picked = None;
    }

    fn clear(&mut self) {
        *self = Self::default();
    }

    fn is_reading(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns false when `name` is not the pick being read.
    fn finish(&mut self, name: &str, bytes: Option<Vec<u8>>) -> bool {
        if self.pending.as_deref() != Some(name) {
            return false;
        }
        self.pending = None;
        self.picked = bytes.map(|bytes| UploadedFile::new(name, bytes));
        true
    }
}

#[component]
pub fn UploadPage() -> Element {
    let ctx = use_context::<AppContext>();
    let mut session = use_context::<Signal<Session>>();

    let mut title = use_signal(|| t!("upload-title-default"));
    let mut pick = use_signal(PickState::default);
    let mut feedback = use_signal(|| Option::<UploadFeedback>::None);

    let accept = ALLOWED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(",");

    let on_file = move |evt: FormEvent| {
        let Some(engine) = evt.files() else {
            pick.with_mut(PickState::clear);
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            pick.with_mut(PickState::clear);
            return;
        };

        pick.with_mut(|state| state.begin(&name));
        spawn(async move {
            let bytes = engine.read_file(&name).await;
            if bytes.is_none() {
                tracing::warn!(name = %name, "file picker returned no bytes");
            }
            if !pick.with_mut(|state| state.finish(&name, bytes)) {
                tracing::debug!(name = %name, "discarding read of a superseded pick");
            }
        });
    };

    let on_upload = move |_| {
        let file = pick.read().picked.clone();
        let title_value = title();
        let outcome = session.with_mut(|session| {
            session.submit_upload(&title_value, file, &ctx.config.uploads_dir)?;
            if ctx.config.extraction.memoize {
                if let Err(err) = session.prime_extraction(ctx.extractor.as_ref()) {
                    tracing::warn!(%err, "extraction at upload time failed; retrying on render");
                }
            }
            Ok::<(), UploadError>(())
        });

        match outcome {
            Ok(()) => {}
            Err(UploadError::AlreadyUploaded) => {}
            Err(UploadError::MissingInput) => {
                feedback.set(Some(UploadFeedback::Warning(t!("upload-missing-input"))))
            }
            Err(UploadError::UnsupportedExtension { .. }) => {
                feedback.set(Some(UploadFeedback::Warning(t!("upload-unsupported"))))
            }
            Err(err @ UploadError::Io { .. }) => {
                tracing::error!(%err, "upload could not be saved");
                feedback.set(Some(UploadFeedback::Error(t!(
                    "upload-failed",
                    reason = err.to_string()
                ))));
            }
        }
    };

    let reading = pick.read().is_reading();
    let status = if reading {
        Some(t!("upload-reading"))
    } else {
        pick.read().picked.as_ref().map(|file| {
            let name = file.file_name().unwrap_or(file.name.as_str()).to_string();
            t!("upload-selected", name = name)
        })
    };

    rsx! {
        section { class: "page page-upload",
            h1 { {t!("upload-title")} }

            div { class: "upload-form",
                label { class: "upload-form__label", r#for: "upload-title", {t!("upload-title-label")} }
                input {
                    id: "upload-title",
                    class: "upload-form__input",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }

                label { class: "visually-hidden", r#for: "upload-file", {t!("upload-file-label")} }
                input {
                    id: "upload-file",
                    class: "upload-form__file",
                    r#type: "file",
                    accept: "{accept}",
                    multiple: false,
                    onchange: on_file,
                }
                span { class: "upload-form__hint", {t!("upload-file-hint")} }

                if let Some(status) = status {
                    p { class: "upload-form__status", "{status}" }
                }

                button {
                    r#type: "button",
                    class: "button button--primary",
                    title: t!("upload-button-help"),
                    disabled: reading,
                    onclick: on_upload,
                    {t!("upload-button")}
                }

                match feedback() {
                    Some(UploadFeedback::Warning(message)) => rsx! {
                        p { class: "upload-form__feedback upload-form__feedback--warning", "{message}" }
                    },
                    Some(UploadFeedback::Error(message)) => rsx! {
                        p { class: "upload-form__feedback upload-form__feedback--error", "{message}" }
                    },
                    None => rsx! {},
                }
            }
        }
    }
}
