//! Course listing client

use crate::config::LandingConfig;
use crate::course::CourseList;
use crate::error::{PreviewFetchFailure, Result};
use tracing::debug;

/// Something that can produce the course preview list.
#[allow(async_fn_in_trait)]
pub trait CourseSource {
    /// Fetch the course listing once
    async fn fetch_courses(&self) -> Result<CourseList>;
}

/// Reads `GET {api_base}/courses` over HTTP.
///
/// No timeout is set on the request, so a backend that never answers keeps
/// the caller waiting.
#[derive(Debug, Clone)]
pub struct HttpCourseSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCourseSource {
    pub fn new(config: &LandingConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: &LandingConfig) -> Self {
        Self {
            client,
            url: config.courses_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl CourseSource for HttpCourseSource {
    async fn fetch_courses(&self) -> Result<CourseList> {
        debug!("Fetching course previews from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(PreviewFetchFailure::Status(response.status().as_u16()));
        }

        let body = response.bytes().await?;
        CourseList::from_body(&body)
    }
}

impl<S: CourseSource> CourseSource for &S {
    async fn fetch_courses(&self) -> Result<CourseList> {
        (**self).fetch_courses().await
    }
}
