use dioxus::prelude::*;

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

/// Hosted Spline scene shown behind the hero copy.
pub const SPLINE_SCENE: &str = "https://prod.spline.design/hGDm7Foxug7C6E8s/scene.splinecode";

const SPLINE_VIEWER: &str = "https://unpkg.com/@splinetool/viewer@1.9.82/build/spline-viewer.js";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCopy {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

pub const HERO_STATS: &[StatCopy] = &[
    StatCopy { icon: "📚", label: "Courses", value: "1,240+" },
    StatCopy { icon: "🎬", label: "Lessons", value: "9,300+" },
    StatCopy { icon: "📝", label: "Assignments", value: "3,700+" },
    StatCopy { icon: "✅", label: "Quizzes", value: "1,800+" },
];

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }
        document::Script { r#type: "module", src: SPLINE_VIEWER }

        section {
            id: "hero",
            div {
                class: "hero-scene",
                spline-viewer { "url": SPLINE_SCENE }
            }
            div { class: "hero-veil" }
            div {
                class: "hero-content",
                div {
                    class: "hero-copy",
                    h1 {
                        class: "hero-title fade-up",
                        "Build. Teach. Learn. Grow."
                    }
                    p {
                        class: "hero-lede fade-up fade-up-delayed",
                        "A modern platform for teachers to publish courses and for students to learn, submit assignments, take quizzes, and track progress — all in one place."
                    }
                    div {
                        class: "hero-actions fade-up fade-up-last",
                        button { class: "btn btn-primary btn-large", "Create a course" }
                        button { class: "btn btn-secondary btn-large", "Browse catalog" }
                    }
                    div {
                        class: "hero-stats",
                        for stat in HERO_STATS.iter() {
                            Stat {
                                key: "{stat.label}",
                                icon: stat.icon,
                                label: stat.label,
                                value: stat.value,
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Headline number tile
#[component]
pub fn Stat(icon: &'static str, label: &'static str, value: &'static str) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-icon", "{icon}" }
            div {
                div { class: "stat-label", "{label}" }
                div { class: "stat-value", "{value}" }
            }
        }
    }
}
