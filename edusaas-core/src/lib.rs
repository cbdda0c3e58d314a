//! EduSaaS landing page core library
//!
//! Everything the landing page does that is not markup: configuration, the
//! course listing client and the course preview lifecycle.

pub mod client;
pub mod config;
pub mod course;
pub mod error;
pub mod loader;

pub use client::{CourseSource, HttpCourseSource};
pub use config::LandingConfig;
pub use course::{CourseList, CourseSummary, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
pub use error::{ConfigError, PreviewFetchFailure, Result};
pub use loader::{
    LoaderState, MountGuard, MountTicket, PreviewCard, PreviewLoader, Settlement,
    PLACEHOLDER_COUNT, PREVIEW_LIMIT,
};

/// Load the course preview for `config` once, committing every state change.
pub async fn load_course_preview<F>(
    config: &LandingConfig,
    guard: &MountGuard,
    commit: F,
) -> Settlement
where
    F: FnMut(LoaderState),
{
    PreviewLoader::new(HttpCourseSource::new(config), guard)
        .run(commit)
        .await
}
