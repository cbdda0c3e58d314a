//! Course preview loading lifecycle
//!
//! A preview goes `Idle -> Loading -> Loaded | Failed` exactly once per
//! mount. Settlement is only committed while the mount that started the
//! request is still alive, which is tracked by [`MountGuard`].

use crate::client::CourseSource;
use crate::course::{CourseList, CourseSummary};
use crate::error::Result;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use strum::{Display, IntoStaticStr};
use tracing::debug;

/// Maximum number of real course cards shown.
pub const PREVIEW_LIMIT: usize = 3;

/// Number of skeleton cards shown while loading.
pub const PLACEHOLDER_COUNT: usize = 3;

/// State of one preview lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LoaderState {
    /// Mounted, request not started yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Request settled with data, possibly empty
    Loaded(Vec<CourseSummary>),
    /// Request settled without data. Renders like `Loaded(vec![])`.
    Failed,
}

impl LoaderState {
    /// Map a fetch outcome to its terminal state.
    ///
    /// This is the only place a fetch failure is handled: it is logged and
    /// turned into [`LoaderState::Failed`], which carries no courses.
    pub fn settle(outcome: Result<CourseList>) -> Self {
        match outcome {
            Ok(list) => LoaderState::Loaded(list.items),
            Err(e) => {
                debug!("Course preview unavailable: {}", e);
                LoaderState::Failed
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoaderState::Loading)
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, LoaderState::Loaded(_) | LoaderState::Failed)
    }

    /// Courses received, empty unless the state is `Loaded`
    pub fn courses(&self) -> &[CourseSummary] {
        match self {
            LoaderState::Loaded(items) => items,
            _ => &[],
        }
    }

    /// Short name of the state, e.g. `"loading"`
    pub fn phase(&self) -> &'static str {
        self.into()
    }

    /// Cards to render for this state
    pub fn cards(&self) -> Vec<PreviewCard> {
        if self.is_settled() {
            self.courses()
                .iter()
                .take(PREVIEW_LIMIT)
                .map(PreviewCard::from)
                .collect()
        } else {
            vec![PreviewCard::Placeholder; PLACEHOLDER_COUNT]
        }
    }
}

/// Render model of one card in the preview grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewCard {
    /// Skeleton card, carries no text
    Placeholder,
    Course { title: String, description: String },
}

impl From<&CourseSummary> for PreviewCard {
    fn from(course: &CourseSummary) -> Self {
        PreviewCard::Course {
            title: course.display_title().to_string(),
            description: course.display_description().to_string(),
        }
    }
}

/// Tracks whether the component that owns a preview is still mounted.
///
/// Clones share the same state. [`MountGuard::teardown`] invalidates every
/// ticket issued before it.
#[derive(Debug, Clone, Default)]
pub struct MountGuard {
    epoch: Arc<AtomicU64>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ticket(&self) -> MountTicket {
        MountTicket {
            epoch: Arc::clone(&self.epoch),
            issued: self.epoch.load(Ordering::Acquire),
        }
    }

    pub fn teardown(&self) {
        self.epoch.fetch_add(1, Ordering::AcqRel);
    }
}

/// Proof that a mount was alive when the ticket was issued
#[derive(Debug, Clone)]
pub struct MountTicket {
    epoch: Arc<AtomicU64>,
    issued: u64,
}

impl MountTicket {
    pub fn is_current(&self) -> bool {
        self.epoch.load(Ordering::Acquire) == self.issued
    }
}

/// Outcome of [`PreviewLoader::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Settlement {
    /// `Loading` and the terminal state were both committed
    Committed,
    /// The mount went away while the request was in flight
    Discarded,
    /// The mount went away before the request started
    NotStarted,
}

/// One-shot course preview loader
pub struct PreviewLoader<S> {
    source: S,
    ticket: MountTicket,
}

impl<S: CourseSource> PreviewLoader<S> {
    pub fn new(source: S, guard: &MountGuard) -> Self {
        Self {
            source,
            ticket: guard.ticket(),
        }
    }

    /// Run the lifecycle, handing every state change to `commit`.
    ///
    /// `commit` sees `Loading` and then exactly one settled state, unless the
    /// mount was torn down, in which case nothing more is committed.
    pub async fn run<F>(self, mut commit: F) -> Settlement
    where
        F: FnMut(LoaderState),
    {
        if !self.ticket.is_current() {
            debug!("Course preview unmounted before loading started");
            return Settlement::NotStarted;
        }

        commit(LoaderState::Loading);
        let outcome = self.source.fetch_courses().await;

        if !self.ticket.is_current() {
            debug!("Dropping course preview result for an unmounted component");
            return Settlement::Discarded;
        }

        commit(LoaderState::settle(outcome));
        Settlement::Committed
    }
}
