use dioxus::prelude::*;

const NAV_CSS: Asset = asset!("/assets/styling/nav.css");

/// Fixed top bar. The buttons and search field are decorative.
#[component]
pub fn TopNav() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAV_CSS }

        nav {
            id: "top-nav",
            div {
                class: "nav-inner",
                div {
                    class: "nav-brand",
                    button { class: "nav-menu", "aria-label": "Open menu", "☰" }
                    span { class: "brand", "EduSaaS" }
                }
                label {
                    class: "nav-search",
                    span { class: "nav-search-icon", "🔍" }
                    input {
                        r#type: "search",
                        placeholder: "Search courses, lessons...",
                    }
                }
                div {
                    class: "nav-actions",
                    button { class: "btn btn-ghost", "Sign in" }
                    button { class: "btn btn-primary", "Get started" }
                }
            }
        }
    }
}
