use dioxus::prelude::*;
use edusaas_core::{load_course_preview, LandingConfig, LoaderState, MountGuard, PreviewCard};

const COURSE_PREVIEW_CSS: Asset = asset!("/assets/styling/course_preview.css");

/// Up to three sample courses from the backend, with skeleton cards while
/// the request is in flight.
///
/// The request is made once per mount. A failed request shows an empty
/// grid and never an error.
#[component]
pub fn CoursePreview() -> Element {
    let config = use_context::<LandingConfig>();
    let mut state = use_signal(LoaderState::default);
    let guard = use_hook(MountGuard::new);

    let mount = guard.clone();
    use_drop(move || mount.teardown());

    use_hook(move || {
        spawn(async move {
            let settlement = load_course_preview(&config, &guard, |next| state.set(next)).await;
            tracing::debug!("Course preview finished: {}", settlement);
        });
    });

    let current = state.read();

    rsx! {
        document::Link { rel: "stylesheet", href: COURSE_PREVIEW_CSS }
        CourseCards { phase: current.phase(), cards: current.cards() }
    }
}

/// The preview grid for an already computed set of cards
#[component]
pub fn CourseCards(phase: &'static str, cards: Vec<PreviewCard>) -> Element {
    rsx! {
        div {
            class: "course-grid",
            "data-state": phase,
            for (i, card) in cards.into_iter().enumerate() {
                PreviewTile { key: "{i}", card }
            }
        }
    }
}

#[component]
fn PreviewTile(card: PreviewCard) -> Element {
    match card {
        PreviewCard::Placeholder => rsx! {
            div {
                class: "course-card course-card-skeleton",
                "aria-busy": "true",
                div { class: "course-thumb" }
                div { class: "skeleton-line skeleton-title" }
                div { class: "skeleton-line skeleton-text" }
                div {
                    class: "course-badges",
                    span { class: "badge badge-skeleton" }
                    span { class: "badge badge-skeleton" }
                }
            }
        },
        PreviewCard::Course { title, description } => rsx! {
            div {
                class: "course-card",
                div { class: "course-thumb" }
                div { class: "course-title", "{title}" }
                div { class: "course-description", "{description}" }
                div {
                    class: "course-badges",
                    span { class: "badge", "Beginner" }
                    span { class: "badge", "Design" }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edusaas_core::{CourseSummary, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
    use pretty_assertions::assert_eq;

    fn render(state: &LoaderState) -> String {
        let props = CourseCardsProps {
            phase: state.phase(),
            cards: state.cards(),
        };
        let mut dom = VirtualDom::new_with_props(CourseCards, props);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn real_cards(html: &str) -> usize {
        html.matches("class=\"course-card\"").count()
    }

    #[test]
    fn test_loading_renders_bare_skeletons() {
        let html = render(&LoaderState::Loading);

        assert_eq!(html.matches("course-card-skeleton").count(), 3);
        assert_eq!(real_cards(&html), 0);
        assert!(html.contains("data-state=\"loading\""));
        assert!(!html.contains(DEFAULT_TITLE));
        assert!(!html.contains(DEFAULT_DESCRIPTION));
        assert!(!html.contains("Beginner"));
    }

    #[test]
    fn test_single_course_is_not_padded() {
        let html = render(&LoaderState::Loaded(vec![CourseSummary::titled(
            "Intro to Design",
        )]));

        assert_eq!(real_cards(&html), 1);
        assert!(!html.contains("course-card-skeleton"));
        assert!(html.contains("Intro to Design"));
        assert!(html.contains("Clean and minimal learning experience"));
    }

    #[test]
    fn test_extra_courses_are_cut() {
        let courses = (1..=5)
            .map(|i| CourseSummary::new(format!("Course {}", i), "About it"))
            .collect();
        let html = render(&LoaderState::Loaded(courses));

        assert_eq!(real_cards(&html), 3);
        assert!(html.contains("Course 3"));
        assert!(!html.contains("Course 4"));
    }

    #[test]
    fn test_failed_matches_empty() {
        let failed = render(&LoaderState::Failed);
        let empty = render(&LoaderState::Loaded(Vec::new()));

        assert_eq!(real_cards(&failed), 0);
        assert_eq!(
            failed.replace("data-state=\"failed\"", ""),
            empty.replace("data-state=\"loaded\"", "")
        );
    }
}
