use reqwest::{header, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use time::{macros::format_description, Date, Duration};

use crate::{
    domain::{Activity, CreatedActivity, NewTimeEntry, Project, TimeEntry},
    Credentials, MocoURL,
};

/// Number of days before the reference date included when fetching time entries.
pub const TIME_ENTRY_WINDOW_DAYS: i64 = 6;

pub struct MocoClient {
    http: reqwest::Client,
    base_url: MocoURL,
    credentials: Credentials,
}

impl MocoClient {
    pub fn new(credentials: Credentials) -> Self {
        let base_url = MocoURL::for_domain(&credentials.domain);
        Self::with_base_url(credentials, base_url)
    }

    pub fn with_base_url(credentials: Credentials, base_url: MocoURL) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &MocoURL {
        &self.base_url
    }

    fn request(&self, method: Method, url: &MocoURL) -> Result<RequestBuilder, MocoError> {
        let auth = self
            .credentials
            .as_authorization_header()
            .map_err(|e| MocoError::Other(format!("Invalid API key: {}", e)))?;

        Ok(self
            .http
            .request(method, url.as_ref())
            .header(header::AUTHORIZATION, auth))
    }

    /// Send a request and turn every non-2xx answer into an error carrying status and body.
    async fn send(
        &self,
        request: RequestBuilder,
        method: &Method,
        url: &MocoURL,
    ) -> Result<Response, MocoError> {
        tracing::debug!(%method, url = url.as_ref(), "MOCO request");

        let resp = request.send().await.map_err(|e| {
            tracing::warn!(%method, url = url.as_ref(), error = %e, "MOCO request failed");
            MocoError::Request(e.to_string())
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::warn!(%method, url = url.as_ref(), status = status.as_u16(), %body, "MOCO error response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(MocoError::Unauthorized {
                status: status.as_u16(),
                body,
            });
        }

        Err(MocoError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, url: MocoURL) -> Result<T, MocoError> {
        let request = self.request(Method::GET, &url)?;
        let resp = self.send(request, &Method::GET, &url).await?;
        parse_body(resp).await
    }

    pub async fn fetch_projects(&self) -> Result<Vec<Project>, MocoError> {
        let url = self.base_url.append_path("/projects/assigned");
        self.fetch(url).await
    }

    /// Fetch the entries of the trailing window ending at `reference` (inclusive).
    pub async fn fetch_time_entries(&self, reference: Date) -> Result<Vec<TimeEntry>, MocoError> {
        let (from, to) = trailing_window(reference);
        let url = self
            .base_url
            .append_path("/activities")
            .with_query("from", &format_date(from)?)
            .with_query("to", &format_date(to)?);

        let activities: Vec<Activity> = self.fetch(url).await?;
        Ok(activities.into_iter().map(TimeEntry::from).collect())
    }

    /// Create a time entry and return the id assigned by MOCO.
    pub async fn create_time_entry(&self, entry: &NewTimeEntry) -> Result<i64, MocoError> {
        let url = self.base_url.append_path("/activities");
        tracing::debug!(?entry, "Creating time entry");

        let request = self.request(Method::POST, &url)?.json(entry);
        let resp = self.send(request, &Method::POST, &url).await?;
        let created: CreatedActivity = parse_body(resp).await?;

        Ok(created.id)
    }

    pub async fn delete_time_entry(&self, id: i64) -> Result<(), MocoError> {
        let url = self.base_url.append_path(&format!("/activities/{}", id));

        let request = self.request(Method::DELETE, &url)?;
        self.send(request, &Method::DELETE, &url).await?;

        Ok(())
    }
}

async fn parse_body<T: DeserializeOwned>(resp: Response) -> Result<T, MocoError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| MocoError::Request(e.to_string()))?;
    tracing::debug!(status = status.as_u16(), %body, "MOCO response");

    serde_json::from_str(&body).map_err(|e| {
        tracing::warn!(error = %e, "Failed to parse MOCO response");
        MocoError::Parsing(format!("Failed to parse response as JSON: {}", e))
    })
}

/// The `(from, to)` range covered by a time entry fetch for `reference`.
pub fn trailing_window(reference: Date) -> (Date, Date) {
    let from = reference
        .checked_sub(Duration::days(TIME_ENTRY_WINDOW_DAYS))
        .unwrap_or(Date::MIN);
    (from, reference)
}

fn format_date(date: Date) -> Result<String, MocoError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|e| MocoError::Other(format!("Failed to format date: {}", e)))
}

#[derive(Error, Debug)]
pub enum MocoError {
    #[error("unauthorized, status code {status}, body: {body}")]
    Unauthorized { status: u16, body: String },
    #[error("RequestError: {0}")]
    Request(String),
    #[error("status code {status}, body: {body}")]
    Status { status: u16, body: String },
    #[error("ParsingError: {0}")]
    Parsing(String),
    #[error("Other: {0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;

    #[test]
    fn trailing_window_spans_seven_days() {
        let (from, to) = trailing_window(date!(2024 - 01 - 15));
        assert_eq!(from, date!(2024 - 01 - 09));
        assert_eq!(to, date!(2024 - 01 - 15));
    }

    #[test]
    fn trailing_window_crosses_month_boundary() {
        let (from, _) = trailing_window(date!(2024 - 03 - 02));
        assert_eq!(from, date!(2024 - 02 - 25));
    }

    #[test]
    fn format_date_is_iso() {
        assert_eq!(format_date(date!(2024 - 01 - 05)).unwrap(), "2024-01-05");
    }

    #[test]
    fn status_error_carries_code_and_body() {
        let err = MocoError::Status {
            status: 422,
            body: "{\"message\":\"hours invalid\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "status code 422, body: {\"message\":\"hours invalid\"}"
        );
    }

    /// Accept one connection, answer with `status` and `body`, return the raw request.
    async fn serve_once(status: &str, body: &str) -> (MocoClient, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        let client = MocoClient::with_base_url(
            Credentials::new("acme", "k"),
            MocoURL::custom(format!("http://{}/api/v1", addr)),
        );
        (client, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= head_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    #[tokio::test]
    async fn fetch_time_entries_requests_trailing_window_with_token() {
        let body = r#"[{"id":5,"date":"2024-01-15","hours":1.5,"description":null,
            "project":{"id":1,"name":"Website"},"task":{"id":11,"name":"Design"}}]"#;
        let (client, server) = serve_once("200 OK", body).await;

        let entries = client
            .fetch_time_entries(date!(2024 - 01 - 15))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/v1/activities?from=2024-01-09&to=2024-01-15 HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: token k"));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].task_name, "Design");
        assert_eq!(entries[0].description, "");
    }

    #[tokio::test]
    async fn fetch_projects_hits_assigned_endpoint() {
        let body = r#"[{"id":1,"name":"Website","customer":{"id":2,"name":"ACME"},
            "tasks":[{"id":11,"name":"Design","active":true,"billable":true}]}]"#;
        let (client, server) = serve_once("200 OK", body).await;

        let projects = client.fetch_projects().await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /api/v1/projects/assigned HTTP/1.1"));
        assert_eq!(projects[0].tasks[0].name, "Design");
    }

    #[tokio::test]
    async fn create_returns_id_from_response() {
        let (client, server) = serve_once("201 Created", r#"{"id":77,"date":"2024-01-15"}"#).await;
        let entry = NewTimeEntry {
            date: "2024-01-15".to_string(),
            hours: 1.5,
            project_id: 1,
            task_id: 11,
            description: "Standup".to_string(),
        };

        let id = client.create_time_entry(&entry).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(id, 77);
        assert!(request.starts_with("POST /api/v1/activities HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: token k"));
        assert!(request.contains(r#""task_id":11"#));
        assert!(request.contains(r#""description":"Standup""#));
    }

    #[tokio::test]
    async fn non_success_status_carries_code_and_body() {
        let (client, server) =
            serve_once("422 Unprocessable Entity", r#"{"message":"bad"}"#).await;

        let err = client.delete_time_entry(9).await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, MocoError::Status { status: 422, .. }));
        assert_eq!(err.to_string(), r#"status code 422, body: {"message":"bad"}"#);
    }

    #[tokio::test]
    async fn unauthorized_keeps_status_code() {
        let (client, server) = serve_once("401 Unauthorized", "invalid token").await;
        let err = client.fetch_projects().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, MocoError::Unauthorized { status: 401, .. }));
        assert_eq!(
            err.to_string(),
            "unauthorized, status code 401, body: invalid token"
        );

        let (client, server) = serve_once("403 Forbidden", "no access").await;
        let err = client.fetch_projects().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, MocoError::Unauthorized { status: 403, .. }));
    }

    #[tokio::test]
    async fn delete_targets_activity_by_id() {
        let (client, server) = serve_once("204 No Content", "").await;

        client.delete_time_entry(42).await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("DELETE /api/v1/activities/42 HTTP/1.1"));
        assert!(request.to_lowercase().contains("authorization: token k"));
    }

    #[tokio::test]
    async fn malformed_body_is_a_parsing_error() {
        let (client, server) = serve_once("200 OK", "not json").await;

        let err = client.fetch_projects().await.unwrap_err();
        server.await.unwrap();

        assert!(matches!(err, MocoError::Parsing(_)));
    }

    #[test]
    fn client_defaults_to_hosted_domain() {
        let client = MocoClient::new(Credentials::new("acme", "key"));
        assert_eq!(client.base_url().as_ref(), "https://acme.mocoapp.com/api/v1");
    }
}
