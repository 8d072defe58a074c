use crate::domain::model::{Deployment, Environment, Project};
use crate::domain::ports::DeploymentApi;
use crate::utils::error::{Result, TrackError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

// Page size for list endpoints; the loop stops at the first short page.
const PER_PAGE: usize = 100;

pub struct GitLabClient {
    client: Client,
    base_url: Url,
}

impl GitLabClient {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| TrackError::InvalidConfigValueError {
                field: "url".to_string(),
                value: base_url.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;

        let mut token_value =
            HeaderValue::from_str(token).map_err(|_| TrackError::AuthError {
                message: "Access token contains characters that cannot be sent in a header"
                    .to_string(),
            })?;
        token_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert("PRIVATE-TOKEN", token_value);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base_url })
    }

    /// Builds a client and verifies the token against the instance, the way
    /// an interactive session would log in before issuing queries.
    pub async fn connect(base_url: &str, token: &str) -> Result<Self> {
        let api = Self::new(base_url, token)?;
        api.authenticate().await?;
        Ok(api)
    }

    async fn authenticate(&self) -> Result<()> {
        let url = self.endpoint(&["user"])?;
        tracing::debug!("Authenticating against {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TrackError::AuthError {
                message: format!("Unable to reach {}: {}", self.base_url, e),
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(TrackError::AuthError {
                message: "The access token was rejected by the server".to_string(),
            }),
            status if !status.is_success() => Err(TrackError::AuthError {
                message: format!("Authentication check failed with status {}", status),
            }),
            _ => Ok(()),
        }
    }

    // Appends /api/v4/<segments> to the instance URL. Each segment is pushed
    // as a single path segment, so a "group/project" path arrives
    // percent-encoded the way the API expects.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path =
                url.path_segments_mut()
                    .map_err(|_| TrackError::InvalidConfigValueError {
                        field: "url".to_string(),
                        value: self.base_url.to_string(),
                        reason: "URL cannot be used as an API base".to_string(),
                    })?;
            path.pop_if_empty();
            path.push("api");
            path.push("v4");
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }

    async fn fetch_paged<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>> {
        let mut items: Vec<T> = Vec::new();
        let mut page = 1u32;

        loop {
            let mut page_url = url.clone();
            page_url
                .query_pairs_mut()
                .append_pair("per_page", &PER_PAGE.to_string())
                .append_pair("page", &page.to_string());

            tracing::debug!("Fetching {}", page_url);
            let response = self.client.get(page_url).send().await?;
            let batch: Vec<T> = response.error_for_status()?.json().await?;

            let full_page = batch.len() >= PER_PAGE;
            items.extend(batch);

            if !full_page {
                break;
            }
            page += 1;
        }

        Ok(items)
    }
}

#[async_trait]
impl DeploymentApi for GitLabClient {
    async fn get_project(&self, id_or_path: &str) -> Result<Project> {
        let url = self.endpoint(&["projects", id_or_path])?;
        tracing::debug!("Fetching project from {}", url);

        let response = self.client.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(TrackError::ProjectNotFound {
                project: id_or_path.to_string(),
            });
        }

        let project = response.error_for_status()?.json::<Project>().await?;
        Ok(project)
    }

    async fn list_environments(&self, project: &Project) -> Result<Vec<Environment>> {
        let url = self.endpoint(&["projects", &project.id.to_string(), "environments"])?;
        self.fetch_paged(url).await
    }

    async fn list_deployments(
        &self,
        project: &Project,
        environment_id: u64,
    ) -> Result<Vec<Deployment>> {
        let url = self.endpoint(&[
            "projects",
            &project.id.to_string(),
            "environments",
            &environment_id.to_string(),
            "deployments",
        ])?;
        self.fetch_paged(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn project_path_is_encoded_as_a_single_segment() {
        let client = GitLabClient::new("https://gitlab.example.com", "secret").unwrap();
        let url = client.endpoint(&["projects", "group/project"]).unwrap();
        assert_eq!(url.path(), "/api/v4/projects/group%2Fproject");
    }

    #[test]
    fn endpoint_handles_trailing_slash_in_base_url() {
        let client = GitLabClient::new("https://gitlab.example.com/", "secret").unwrap();
        let url = client.endpoint(&["user"]).unwrap();
        assert_eq!(url.path(), "/api/v4/user");
    }

    #[tokio::test]
    async fn connect_sends_the_token_header() {
        let server = MockServer::start();
        let auth_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v4/user")
                .header("PRIVATE-TOKEN", "glpat-secret");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"id": 1, "username": "deployer"}));
        });

        let result = GitLabClient::connect(&server.base_url(), "glpat-secret").await;

        auth_mock.assert();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn connect_rejects_an_invalid_token() {
        let server = MockServer::start();
        let auth_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v4/user");
            then.status(401)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"message": "401 Unauthorized"}));
        });

        let result = GitLabClient::connect(&server.base_url(), "wrong").await;

        auth_mock.assert();
        assert!(matches!(result, Err(TrackError::AuthError { .. })));
    }

    #[tokio::test]
    async fn get_project_maps_404_to_not_found() {
        let server = MockServer::start();
        let project_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v4/projects/missing");
            then.status(404)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"message": "404 Project Not Found"}));
        });

        let client = GitLabClient::new(&server.base_url(), "secret").unwrap();
        let result = client.get_project("missing").await;

        project_mock.assert();
        assert!(matches!(
            result,
            Err(TrackError::ProjectNotFound { ref project }) if project == "missing"
        ));
    }

    #[tokio::test]
    async fn get_project_ignores_unknown_fields() {
        let server = MockServer::start();
        let project_mock = server.mock(|when, then| {
            when.method(GET).path("/api/v4/projects/42");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "id": 42,
                    "name": "My Project",
                    "path_with_namespace": "group/my-project",
                    "default_branch": "main"
                }));
        });

        let client = GitLabClient::new(&server.base_url(), "secret").unwrap();
        let project = client.get_project("42").await.unwrap();

        project_mock.assert();
        assert_eq!(project.id, 42);
        assert_eq!(project.name, "My Project");
    }

    #[tokio::test]
    async fn list_environments_follows_full_pages() {
        let server = MockServer::start();

        let first_page: Vec<serde_json::Value> = (1..=PER_PAGE as u64)
            .map(|i| serde_json::json!({"id": i, "name": format!("review/{}", i)}))
            .collect();
        let page_one = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v4/projects/42/environments")
                .query_param("page", "1");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::Value::Array(first_page));
        });
        let page_two = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v4/projects/42/environments")
                .query_param("page", "2");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([{"id": 999, "name": "production"}]));
        });

        let client = GitLabClient::new(&server.base_url(), "secret").unwrap();
        let project = Project {
            id: 42,
            name: "My Project".to_string(),
        };
        let environments = client.list_environments(&project).await.unwrap();

        page_one.assert();
        page_two.assert();
        assert_eq!(environments.len(), PER_PAGE + 1);
        assert_eq!(environments.last().unwrap().name, "production");
    }

    #[tokio::test]
    async fn list_deployments_parses_refs_and_timestamps() {
        let server = MockServer::start();
        let deployments_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/v4/projects/42/environments/123/deployments");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!([
                    {"id": 7, "ref": "v1.0.0", "created_at": "2023-01-01T00:00:00Z"},
                    {"id": 8, "ref": "v1.1.0", "created_at": "2023-02-01T12:00:00Z"}
                ]));
        });

        let client = GitLabClient::new(&server.base_url(), "secret").unwrap();
        let project = Project {
            id: 42,
            name: "My Project".to_string(),
        };
        let deployments = client.list_deployments(&project, 123).await.unwrap();

        deployments_mock.assert();
        assert_eq!(deployments.len(), 2);
        assert_eq!(deployments[1].ref_name, "v1.1.0");
        assert_eq!(deployments[1].deployed_at(), "2023-02-01T12:00:00Z");
    }
}
