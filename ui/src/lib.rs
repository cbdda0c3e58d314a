//! This crate contains all shared UI for the workspace.

mod nav;
pub use nav::TopNav;

mod hero;
pub use hero::{Hero, Stat, HERO_STATS, SPLINE_SCENE};

mod features;
pub use features::{Feature, FeatureCopy, FeatureGrid, CORE_FEATURES, PLATFORM_FEATURES};

mod course_preview;
pub use course_preview::{CourseCards, CoursePreview};

mod footer;
pub use footer::Footer;
