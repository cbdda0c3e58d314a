use chrono::{Datelike, Local};
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let year = Local::now().year();

    rsx! {
        footer {
            id: "footer",
            "© {year} EduSaaS. All rights reserved."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_shows_current_year() {
        let mut dom = VirtualDom::new(Footer);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let year = Local::now().year();
        assert!(html.contains(&format!("© {} EduSaaS. All rights reserved.", year)));
    }
}
