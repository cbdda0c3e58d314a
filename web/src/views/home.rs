use dioxus::prelude::*;
use ui::{CoursePreview, FeatureGrid, Footer, Hero, TopNav, CORE_FEATURES, PLATFORM_FEATURES};

#[component]
pub fn Home() -> Element {
    rsx! {
        TopNav {}
        Hero {}
        main {
            class: "landing-main",
            section {
                class: "landing-section",
                FeatureGrid { features: CORE_FEATURES }
                CoursePreview {}
            }
            section {
                class: "landing-section landing-section-tight",
                FeatureGrid { features: PLATFORM_FEATURES }
            }
        }
        Footer {}
    }
}
