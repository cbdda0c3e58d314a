//! Course preview records as returned by the backend

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Title shown when a course has none.
pub const DEFAULT_TITLE: &str = "Sample Course";

/// Description shown when a course has none.
pub const DEFAULT_DESCRIPTION: &str = "Clean and minimal learning experience";

/// Minimal display record for a course preview
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CourseSummary {
    pub fn new<T: Into<String>, D: Into<String>>(title: T, description: D) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    pub fn titled<T: Into<String>>(title: T) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
        }
    }

    /// Read one element of the `items` array. Anything that is not an object,
    /// and any field that is not a string, counts as absent.
    pub fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).and_then(Value::as_str).map(str::to_owned);
        Self {
            title: field("title"),
            description: field("description"),
        }
    }

    /// Title to render, falling back to [`DEFAULT_TITLE`]
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(DEFAULT_TITLE)
    }

    /// Description to render, falling back to [`DEFAULT_DESCRIPTION`]
    pub fn display_description(&self) -> &str {
        non_empty(self.description.as_deref()).unwrap_or(DEFAULT_DESCRIPTION)
    }
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

/// Body of `GET /courses`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseList {
    #[serde(default)]
    pub items: Vec<CourseSummary>,
}

impl CourseList {
    pub fn new(items: Vec<CourseSummary>) -> Self {
        Self { items }
    }

    /// Parse a response body. Only invalid JSON is an error; a body without
    /// a usable `items` array is an empty list.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_value(&value))
    }

    pub fn from_value(value: &Value) -> Self {
        let items = value
            .get("items")
            .and_then(Value::as_array)
            .map(|items| items.iter().map(CourseSummary::from_value).collect())
            .unwrap_or_default();
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PreviewFetchFailure;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_defaults() {
        let course = CourseSummary::default();
        assert_eq!(course.display_title(), "Sample Course");
        assert_eq!(
            course.display_description(),
            "Clean and minimal learning experience"
        );

        let blank = CourseSummary::new("", "");
        assert_eq!(blank.display_title(), DEFAULT_TITLE);
        assert_eq!(blank.display_description(), DEFAULT_DESCRIPTION);
    }

    #[test]
    fn test_display_keeps_real_text() {
        let course = CourseSummary::new("Intro to Design", "Shapes and colour");
        assert_eq!(course.display_title(), "Intro to Design");
        assert_eq!(course.display_description(), "Shapes and colour");
    }

    #[test]
    fn test_parse_keeps_server_order() {
        let body = br#"{"items":[{"title":"B"},{"title":"A","description":"first"},{"title":"C"}]}"#;
        let list = CourseList::from_body(body).unwrap();
        let titles: Vec<_> = list.items.iter().map(|c| c.display_title()).collect();
        assert_eq!(titles, vec!["B", "A", "C"]);
        assert_eq!(list.items[1].description.as_deref(), Some("first"));
    }

    #[test]
    fn test_parse_lenient_items() {
        let body = br#"{"items":[null, 7, {"title": 12, "description": null}, {"title":"Ok"}]}"#;
        let list = CourseList::from_body(body).unwrap();
        assert_eq!(
            list.items,
            vec![
                CourseSummary::default(),
                CourseSummary::default(),
                CourseSummary::default(),
                CourseSummary::titled("Ok"),
            ]
        );
    }

    #[test]
    fn test_parse_missing_or_odd_items() {
        let bodies: [&[u8]; 6] = [
            br#"{}"#,
            br#"{"items":null}"#,
            br#"{"items":"nope"}"#,
            br#"[{"title":"array body"}]"#,
            br#"null"#,
            br#""text""#,
        ];
        for body in bodies {
            let list = CourseList::from_body(body).unwrap();
            assert!(list.is_empty(), "expected no items for {:?}", body);
        }
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = CourseList::from_body(b"<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(PreviewFetchFailure::Decode(_))));
    }
}
