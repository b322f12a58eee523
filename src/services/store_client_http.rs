//! Store server client implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{COOKIE, LOCATION};
use reqwest::redirect::Policy;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::system_stats::SystemStatsEnvelope;
use crate::domain::{
    AppError, Archive, DiffOutcome, FileEntry, PermissionUpdate, RenameRequest, ServerConfig,
    StorePath, SystemStats,
};
use crate::ports::{CreateFolderRequest, DeleteRequest, StoreClient, UploadRequest, UploadResponse};

const SESSION_COOKIE: &str = "session";

/// HTTP client for the store web application.
#[derive(Clone)]
pub struct HttpStoreClient {
    base_url: Url,
    session_cookie: Option<String>,
    max_retries: u32,
    retry_delay_ms: u64,
    client: Client,
}

impl std::fmt::Debug for HttpStoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpStoreClient")
            .field("base_url", &self.base_url)
            .field("max_retries", &self.max_retries)
            .field("retry_delay_ms", &self.retry_delay_ms)
            .field("session_cookie", &self.session_cookie.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpStoreClient {
    /// Create a new HTTP client from the server configuration.
    pub fn new(config: &ServerConfig) -> Result<Self, AppError> {
        // A followed login redirect would turn a refused request into a 200 page.
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(Policy::none())
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            session_cookie: config.session_cookie.clone(),
            max_retries: config.max_retries,
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint below the base URL, percent-encoding each segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Configuration(format!("Base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request, retrying rate limits and server errors with backoff.
    fn send<F>(&self, url: &Url, build: F) -> Result<Response, AppError>
    where
        F: Fn(&Client, Url) -> RequestBuilder,
    {
        let mut last_error = None;
        let max_attempts = self.max_retries.max(1);

        for attempt in 0..max_attempts {
            if attempt > 0 {
                let delay = self.retry_delay_ms * 2_u64.pow(attempt.saturating_sub(1));
                tracing::warn!(%url, attempt = attempt + 1, max_attempts, delay_ms = delay, "retrying request");
                std::thread::sleep(Duration::from_millis(delay));
            }

            let mut request = build(&self.client, url.clone());
            if let Some(cookie) = &self.session_cookie {
                request = request.header(COOKIE, format!("{}={}", SESSION_COOKIE, cookie));
            }

            tracing::debug!(%url, attempt = attempt + 1, "sending request");
            let outcome = request
                .send()
                .map_err(|e| AppError::Http(e.to_string()))
                .and_then(check_status);

            match outcome {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() => last_error = Some(e),
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::Http("Request failed after all retries".into())))
    }

    /// Send and require a success acknowledgement in the body, if any.
    fn send_ack<F>(&self, url: &Url, build: F) -> Result<AckBody, AppError>
    where
        F: Fn(&Client, Url) -> RequestBuilder,
    {
        let response = self.send(url, build)?;
        let status = response.status();
        let text = read_text(response)?;
        interpret_ack(status, &text)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &Url) -> Result<T, AppError> {
        let response = self.send(url, |client, url| client.get(url))?;
        let text = read_text(response)?;
        serde_json::from_str(&text).map_err(|e| AppError::InvalidResponse(e.to_string()))
    }
}

/// Map non-success statuses onto errors, surfacing the server's `error` field.
fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();

    if status.is_success() {
        Ok(response)
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        Err(AppError::RateLimited)
    } else if status.is_server_error() {
        Err(AppError::Server(status.as_u16()))
    } else if status.is_redirection() {
        let message = match response.headers().get(LOCATION).and_then(|v| v.to_str().ok()) {
            Some(location) => format!("authentication required (redirected to {})", location),
            None => "unexpected redirect".to_string(),
        };
        Err(AppError::Api { status: status.as_u16(), message })
    } else {
        let text = response.text().unwrap_or_default();
        let message = serde_json::from_str::<AckBody>(&text)
            .ok()
            .and_then(|body| body.error)
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| if text.trim().is_empty() { "Unknown error".to_string() } else { text });
        Err(AppError::Api { status: status.as_u16(), message })
    }
}

fn read_text(response: Response) -> Result<String, AppError> {
    response.text().map_err(|e| AppError::InvalidResponse(e.to_string()))
}

/// Acknowledgement shape shared by the mutating endpoints.
///
/// Servers signal success through the status code; some also send
/// `success`/`ok` or an `error` field, which are honoured when present.
/// Redirects never reach here: `check_status` rejects them.
#[derive(Debug, Default, Deserialize)]
struct AckBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    success: Option<serde_json::Value>,
    #[serde(default)]
    ok: Option<bool>,
}

fn interpret_ack(status: StatusCode, text: &str) -> Result<AckBody, AppError> {
    // Non-JSON 2xx bodies carry no verdict.
    let Ok(body) = serde_json::from_str::<AckBody>(text) else {
        return Ok(AckBody::default());
    };

    if let Some(error) = body.error.as_ref().filter(|e| !e.is_empty()) {
        return Err(AppError::Api { status: status.as_u16(), message: error.clone() });
    }

    let declined = matches!(body.success, Some(serde_json::Value::Bool(false))) || body.ok == Some(false);
    if declined {
        let message = body.message.clone().unwrap_or_else(|| "Server reported failure".to_string());
        return Err(AppError::Api { status: status.as_u16(), message });
    }

    Ok(body)
}

#[derive(Debug, Deserialize)]
struct UploadBody {
    #[serde(default)]
    filename: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    size: Option<u64>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct PermissionsBody<'a> {
    permissions: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    group: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RenameBody<'a> {
    new_name: &'a str,
}

#[derive(Debug, Serialize)]
struct DeleteBody<'a> {
    files: &'a [String],
    path: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateFolderBody<'a> {
    folder_name: &'a str,
    folder_perms: &'a str,
    path: &'a str,
}

#[derive(Debug, Serialize)]
struct GroupBody<'a> {
    group: &'a str,
}

#[derive(Debug, Deserialize)]
struct DiffBody {
    #[serde(default)]
    diff: Option<String>,
}

impl StoreClient for HttpStoreClient {
    fn list_files(&self, path: &StorePath) -> Result<Vec<FileEntry>, AppError> {
        let mut url = self.endpoint(&["store", "retrieve"])?;
        url.query_pairs_mut().append_pair("path", path.as_str());
        self.get_json(&url)
    }

    fn upload(&self, request: &UploadRequest) -> Result<UploadResponse, AppError> {
        let url = self.endpoint(&["store", "add"])?;
        let response = self.send(&url, |client, url| {
            let part = Part::bytes(request.contents.clone()).file_name(request.file_name.clone());
            let form = Form::new()
                .part("file", part)
                .text("file-group", request.group.clone())
                .text("permissions", request.permissions.to_string())
                .text("path", request.path.to_string());
            client.post(url).multipart(form)
        })?;

        let status = response.status();
        let text = read_text(response)?;
        let body: UploadBody =
            serde_json::from_str(&text).map_err(|e| AppError::InvalidResponse(e.to_string()))?;

        if let Some(error) = body.error.filter(|e| !e.is_empty()) {
            return Err(AppError::Api { status: status.as_u16(), message: error });
        }

        tracing::info!(file = %request.file_name, permissions = %request.permissions, "uploaded file");
        Ok(UploadResponse {
            filename: body.filename.unwrap_or_else(|| request.file_name.clone()),
            message: body.message,
            owner: body.owner,
            size: body.size,
        })
    }

    fn update_permissions(&self, update: &PermissionUpdate) -> Result<(), AppError> {
        let url = self.endpoint(&["store", "permissions", &update.file_id])?;
        let body =
            PermissionsBody { permissions: update.permissions.as_str(), group: update.group.as_deref() };
        self.send_ack(&url, |client, url| client.post(url).json(&body))?;
        Ok(())
    }

    fn rename(&self, request: &RenameRequest) -> Result<(), AppError> {
        let url = self.endpoint(&["store", "rename", &request.file_id])?;
        let body = RenameBody { new_name: &request.new_name };
        self.send_ack(&url, |client, url| client.post(url).json(&body))?;
        Ok(())
    }

    fn delete_multiple(&self, request: &DeleteRequest) -> Result<(), AppError> {
        let url = self.endpoint(&["store", "delete-multiple"])?;
        let body = DeleteBody { files: &request.files, path: request.path.as_str() };
        self.send_ack(&url, |client, url| client.delete(url).json(&body))?;
        Ok(())
    }

    fn create_folder(&self, request: &CreateFolderRequest) -> Result<(), AppError> {
        let url = self.endpoint(&["store", "create-folder"])?;
        let body = CreateFolderBody {
            folder_name: &request.name,
            folder_perms: request.permissions.as_str(),
            path: request.path.as_str(),
        };
        self.send_ack(&url, |client, url| client.post(url).json(&body))?;
        Ok(())
    }

    fn add_group(&self, group: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["auth", "group", "add"])?;
        self.send_ack(&url, |client, url| client.post(url).json(&GroupBody { group }))?;
        Ok(())
    }

    fn remove_group(&self, group: &str) -> Result<(), AppError> {
        let url = self.endpoint(&["auth", "group", "remove"])?;
        self.send_ack(&url, |client, url| client.post(url).json(&GroupBody { group }))?;
        Ok(())
    }

    fn list_archives(&self) -> Result<Vec<Archive>, AppError> {
        let url = self.endpoint(&["store", "archive-list"])?;
        self.get_json(&url)
    }

    fn diff(&self, archive_id: &str) -> Result<DiffOutcome, AppError> {
        let url = self.endpoint(&["store", "diff", archive_id])?;
        let body: DiffBody = self.get_json(&url)?;
        Ok(DiffOutcome::from_diff(body.diff))
    }

    fn restore(&self, archive_id: &str) -> Result<String, AppError> {
        let url = self.endpoint(&["store", "restore", archive_id])?;
        let body = self.send_ack(&url, |client, url| client.post(url))?;
        Ok(body.message.unwrap_or_else(|| "Archive restored successfully".to_string()))
    }

    fn download(&self, file_id: &str) -> Result<Vec<u8>, AppError> {
        let url = self.endpoint(&["store", "download", file_id])?;
        let response = self.send(&url, |client, url| client.get(url))?;
        let bytes = response.bytes().map_err(|e| AppError::InvalidResponse(e.to_string()))?;
        Ok(bytes.to_vec())
    }

    fn system_stats(&self) -> Result<SystemStats, AppError> {
        let url = self.endpoint(&["system_stats"])?;
        let envelope: SystemStatsEnvelope = self.get_json(&url)?;
        Ok(envelope.data)
    }
}
