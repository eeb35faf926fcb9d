//! Dashboard report: a typed view-model and the components that draw it.
//!
//! [`render`] gathers everything a dashboard pass needs (extraction, donut
//! chart, static chart images) into a [`DashboardLayout`]. The components in
//! this module only map that layout to markup.

use std::borrow::Cow;

mod assets;
pub use assets::{load_static_image, png_data_uri};

mod charts;
pub use charts::{donut_geometry, donut_svg, render_donut, DonutGeometry, DonutSegment, DONUT_SIZE};

mod header;
pub use header::HeaderPanels;

mod members;
pub use members::TeamMembersRow;

mod insights;
pub use insights::{AdditionalInsights, FullWidthPanels, ImageCard, ProjectInsights};

use crate::core::{
    config::{DashboardConfig, PanelSection, TeamMember},
    error::RenderError,
    extract::{OkrExtractor, OkrRecord},
    session::{Mode, Session},
};

/// Display width of the donut chart in CSS pixels.
pub const DONUT_DISPLAY_WIDTH: u32 = 200;

/// Everything the dashboard shows, resolved and ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardLayout {
    pub header: HeaderPanel,
    pub members: Vec<TeamMember>,
    pub performance: PerformancePanel,
    pub panels: Vec<ImagePanel>,
}

impl DashboardLayout {
    pub fn panels_in(&self, section: PanelSection) -> Vec<ImagePanel> {
        self.panels
            .iter()
            .filter(|panel| panel.section == section)
            .cloned()
            .collect()
    }
}

/// Two-column header: document title/content and the first OKR record.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderPanel {
    pub title: String,
    pub okr: OkrRecord,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformancePanel {
    pub score: f64,
    pub width: u32,
    pub data_uri: String,
}

/// A pre-rendered chart, inlined.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePanel {
    pub title: String,
    pub section: PanelSection,
    pub width: u32,
    pub data_uri: String,
}

/// Build the dashboard for a session that has completed its upload.
///
/// The extractor runs on every call unless the session holds cached records.
/// An empty extraction result or a missing chart asset aborts the pass.
pub fn render(
    session: &Session,
    config: &DashboardConfig,
    extractor: &dyn OkrExtractor,
) -> Result<DashboardLayout, RenderError> {
    let (Mode::Dashboard, Some(path)) = (session.mode(), session.uploaded_file_path()) else {
        return Err(RenderError::NotReady);
    };

    let records: Cow<'_, [OkrRecord]> = match session.cached_extraction() {
        Some(cached) => Cow::Borrowed(cached),
        None => Cow::Owned(extractor.extract(path)?),
    };
    let okr = records
        .first()
        .cloned()
        .ok_or_else(|| RenderError::ExtractionFailure {
            path: path.to_path_buf(),
        })?;

    let header = HeaderPanel {
        title: session.file_title().unwrap_or_default().to_string(),
        okr,
    };

    let performance = PerformancePanel {
        score: config.score,
        width: DONUT_DISPLAY_WIDTH,
        data_uri: png_data_uri(&render_donut(config.score)?),
    };

    let panels = config
        .panels
        .iter()
        .map(|spec| -> Result<ImagePanel, RenderError> {
            let bytes = load_static_image(&config.image_path(spec))?;
            Ok(ImagePanel {
                title: spec.title.clone(),
                section: spec.section,
                width: spec.width,
                data_uri: png_data_uri(&bytes),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!(
        path = %path.display(),
        panels = panels.len(),
        members = config.members.len(),
        "dashboard rendered"
    );

    Ok(DashboardLayout {
        header,
        members: config.members.clone(),
        performance,
        panels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        error::{AssetError, ExtractionError},
        extract::StaticExtractor,
        storage::UploadedFile,
    };
    use std::cell::Cell;
    use std::fs;
    use std::path::Path;

    struct Fixture {
        _dir: tempfile::TempDir,
        config: DashboardConfig,
        session: Session,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let uploads = dir.path().join("uploaded_files");
        let images = dir.path().join("image");
        fs::create_dir_all(&uploads).unwrap();
        fs::create_dir_all(&images).unwrap();

        let mut config = DashboardConfig::default();
        config.uploads_dir = uploads;
        config.image_dir = images;
        for panel in &config.panels {
            fs::write(config.image_path(panel), panel.title.as_bytes()).unwrap();
        }

        let mut session = Session::new();
        session
            .submit_upload(
                "Quarterly plan",
                Some(UploadedFile::new("plan.pdf", b"%PDF".to_vec())),
                &config.uploads_dir,
            )
            .unwrap();

        Fixture {
            _dir: dir,
            config,
            session,
        }
    }

    fn record(tag: &str) -> OkrRecord {
        OkrRecord {
            content: format!("{tag}-C"),
            objective: format!("{tag}-O"),
            key_result_1: format!("{tag}-K1"),
            key_result_2: format!("{tag}-K2"),
            key_result_3: format!("{tag}-K3"),
        }
    }

    struct CountingExtractor {
        calls: Cell<usize>,
        records: Vec<OkrRecord>,
    }

    impl OkrExtractor for CountingExtractor {
        fn extract(&self, _path: &Path) -> Result<Vec<OkrRecord>, ExtractionError> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.records.clone())
        }
    }

    #[test]
    fn header_uses_only_the_first_record() {
        let fx = fixture();
        let extractor = StaticExtractor::new(vec![record("a"), record("b")]);
        let layout = render(&fx.session, &fx.config, &extractor).unwrap();

        assert_eq!(layout.header.title, "Quarterly plan");
        assert_eq!(layout.header.okr, record("a"));
        assert_eq!(layout.members, fx.config.members);
    }

    #[test]
    fn panels_are_inlined_in_configured_order() {
        let fx = fixture();
        let layout = render(&fx.session, &fx.config, &StaticExtractor::new(vec![record("a")]))
            .unwrap();

        let titles: Vec<_> = layout.panels.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Feature Importance", "Score Comparison by Team", "Team Color", "Field Results"]
        );
        assert_eq!(
            layout.panels[0].data_uri,
            png_data_uri(b"Feature Importance")
        );
        assert_eq!(layout.panels_in(PanelSection::Full).len(), 1);
        assert_eq!(layout.performance.width, DONUT_DISPLAY_WIDTH);
        assert!(layout.performance.data_uri.starts_with("data:image/png;base64,iVBOR"));
    }

    #[test]
    fn empty_extraction_is_a_failure() {
        let fx = fixture();
        let err = render(&fx.session, &fx.config, &StaticExtractor::default()).unwrap_err();
        assert!(matches!(err, RenderError::ExtractionFailure { .. }));
    }

    #[test]
    fn missing_asset_aborts_the_render() {
        let fx = fixture();
        fs::remove_file(fx.config.image_dir.join("team_color.png")).unwrap();
        let err = render(&fx.session, &fx.config, &StaticExtractor::new(vec![record("a")]))
            .unwrap_err();
        match err {
            RenderError::Asset(AssetError::NotFound { path }) => {
                assert!(path.ends_with("team_color.png"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn default_extraction_config_reports_missing_command() {
        let fx = fixture();
        let extractor = crate::core::extract::CommandExtractor::from_config(&fx.config.extraction);
        let err = render(&fx.session, &fx.config, &extractor).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Extraction(ExtractionError::NotConfigured)
        ));
    }

    #[test]
    fn upload_mode_is_not_ready() {
        let fx = fixture();
        let err = render(&Session::new(), &fx.config, &StaticExtractor::default()).unwrap_err();
        assert!(matches!(err, RenderError::NotReady));
    }

    #[test]
    fn extractor_runs_on_every_render_without_cache() {
        let fx = fixture();
        let extractor = CountingExtractor {
            calls: Cell::new(0),
            records: vec![record("a")],
        };
        render(&fx.session, &fx.config, &extractor).unwrap();
        render(&fx.session, &fx.config, &extractor).unwrap();
        assert_eq!(extractor.calls.get(), 2);
    }

    #[test]
    fn primed_session_skips_the_extractor() {
        let mut fx = fixture();
        let extractor = CountingExtractor {
            calls: Cell::new(0),
            records: vec![record("a")],
        };
        fx.session.prime_extraction(&extractor).unwrap();
        let first = render(&fx.session, &fx.config, &extractor).unwrap();
        let second = render(&fx.session, &fx.config, &extractor).unwrap();
        assert_eq!(extractor.calls.get(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn uploaded_path_lands_in_uploads_dir() {
        let fx = fixture();
        assert_eq!(
            fx.session.uploaded_file_path().map(Path::to_path_buf),
            Some(fx.config.uploads_dir.join("plan.pdf"))
        );
    }
}
