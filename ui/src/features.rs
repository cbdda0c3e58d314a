use dioxus::prelude::*;

const FEATURES_CSS: Asset = asset!("/assets/styling/features.css");

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureCopy {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Teaching features, shown above the course preview
pub const CORE_FEATURES: &[FeatureCopy] = &[
    FeatureCopy {
        icon: "📚",
        title: "Courses & Lessons",
        description: "Upload videos, rich content, and organize by modules.",
    },
    FeatureCopy {
        icon: "📝",
        title: "Assignments & Submissions",
        description: "Collect work, grade, and give feedback with ease.",
    },
    FeatureCopy {
        icon: "✅",
        title: "Quizzes",
        description: "Create timed quizzes and auto-grade responses.",
    },
];

/// Platform features, shown below the course preview
pub const PLATFORM_FEATURES: &[FeatureCopy] = &[
    FeatureCopy {
        icon: "📊",
        title: "Analytics",
        description: "Track progress, engagement, and completion rates.",
    },
    FeatureCopy {
        icon: "💳",
        title: "Subscriptions",
        description: "Manage plans and billing with a seamless experience.",
    },
    FeatureCopy {
        icon: "🎬",
        title: "Smooth UX",
        description: "Fast, modern UI with an interactive 3D hero.",
    },
];

#[component]
pub fn FeatureGrid(features: &'static [FeatureCopy]) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: FEATURES_CSS }

        div {
            class: "feature-grid",
            for feature in features.iter() {
                Feature {
                    key: "{feature.title}",
                    icon: feature.icon,
                    title: feature.title,
                    description: feature.description,
                }
            }
        }
    }
}

#[component]
pub fn Feature(icon: &'static str, title: &'static str, description: &'static str) -> Element {
    rsx! {
        div {
            class: "feature",
            div { class: "feature-icon", "{icon}" }
            div { class: "feature-title", "{title}" }
            div { class: "feature-description", "{description}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(features: &'static [FeatureCopy]) -> String {
        let mut dom = VirtualDom::new_with_props(FeatureGrid, FeatureGridProps { features });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_feature_grid_renders_every_feature() {
        let html = render(CORE_FEATURES);
        for feature in CORE_FEATURES {
            assert!(html.contains(feature.description), "missing {}", feature.title);
        }
        assert_eq!(html.matches("class=\"feature\"").count(), 3);
    }

    #[test]
    fn test_feature_sets_are_distinct() {
        let html = render(PLATFORM_FEATURES);
        assert!(html.contains("Analytics"));
        assert!(html.contains("Subscriptions"));
        assert!(!html.contains("Quizzes"));
    }
}
