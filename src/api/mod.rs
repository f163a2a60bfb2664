//! HTTP client for the notes backend.
//!
//! One method per REST endpoint, each a typed request/response pair.
//! The store talks to the backend only through the [`NotesApi`] trait,
//! which keeps every store operation testable without a server.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use url::Url;

use crate::models::{
    CreateNoteRequest, GenerateNoteRequest, Note, TranslateRequest, TranslateResponse,
    TranslateTextRequest, UpdateNoteRequest,
};

mod error;

pub use error::ApiError;

use error::classify_status;

/// Operations the notes backend exposes.
pub trait NotesApi {
    fn list_notes(&self) -> Result<Vec<Note>, ApiError>;
    fn get_note(&self, id: i64) -> Result<Note, ApiError>;
    fn create_note(&self, req: &CreateNoteRequest) -> Result<Note, ApiError>;
    fn update_note(&self, id: i64, req: &UpdateNoteRequest) -> Result<Note, ApiError>;
    fn delete_note(&self, id: i64) -> Result<(), ApiError>;
    fn search_notes(&self, query: &str) -> Result<Vec<Note>, ApiError>;
    fn translate_note(&self, id: i64, target_lang: &str) -> Result<TranslateResponse, ApiError>;
    fn translate_text(&self, req: &TranslateTextRequest) -> Result<TranslateResponse, ApiError>;
    fn generate_note(&self, req: &GenerateNoteRequest) -> Result<Note, ApiError>;
    fn health(&self) -> Result<(), ApiError>;
}

/// Blocking HTTP implementation of [`NotesApi`].
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:8000/api`).
    pub fn new(base_url: &str) -> Result<Self> {
        Url::parse(base_url).with_context(|| format!("invalid base URL: {}", base_url))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check(&self, response: Response) -> Result<Response, ApiError> {
        match classify_status(response.status()) {
            Some(err) => Err(err),
            None => Ok(response),
        }
    }
}

impl NotesApi for ApiClient {
    fn list_notes(&self) -> Result<Vec<Note>, ApiError> {
        let response = self.client.get(self.url("/notes")).send()?;
        Ok(self.check(response)?.json()?)
    }

    fn get_note(&self, id: i64) -> Result<Note, ApiError> {
        let response = self.client.get(self.url(&format!("/notes/{}", id))).send()?;
        Ok(self.check(response)?.json()?)
    }

    fn create_note(&self, req: &CreateNoteRequest) -> Result<Note, ApiError> {
        let response = self.client.post(self.url("/notes")).json(req).send()?;
        Ok(self.check(response)?.json()?)
    }

    fn update_note(&self, id: i64, req: &UpdateNoteRequest) -> Result<Note, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/notes/{}", id)))
            .json(req)
            .send()?;
        Ok(self.check(response)?.json()?)
    }

    fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/notes/{}", id)))
            .send()?;
        // Success body (if any) carries nothing the client needs.
        self.check(response)?;
        Ok(())
    }

    fn search_notes(&self, query: &str) -> Result<Vec<Note>, ApiError> {
        let response = self
            .client
            .get(self.url("/notes/search"))
            .query(&[("q", query)])
            .send()?;
        Ok(self.check(response)?.json()?)
    }

    fn translate_note(&self, id: i64, target_lang: &str) -> Result<TranslateResponse, ApiError> {
        let body = TranslateRequest {
            target_lang: target_lang.to_string(),
        };
        let response = self
            .client
            .post(self.url(&format!("/notes/{}/translate", id)))
            .json(&body)
            .send()?;
        Ok(self.check(response)?.json()?)
    }

    fn translate_text(&self, req: &TranslateTextRequest) -> Result<TranslateResponse, ApiError> {
        let response = self.client.post(self.url("/translate")).json(req).send()?;
        Ok(self.check(response)?.json()?)
    }

    fn generate_note(&self, req: &GenerateNoteRequest) -> Result<Note, ApiError> {
        let response = self
            .client
            .post(self.url("/generate-note"))
            .json(req)
            .send()?;
        Ok(self.check(response)?.json()?)
    }

    fn health(&self) -> Result<(), ApiError> {
        let response = self
            .client
            .get(self.url("/health"))
            .timeout(Duration::from_secs(5))
            .send()?;
        self.check(response)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ApiClient::new("http://localhost:8000/api");
        assert!(client.is_ok());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(ApiClient::new("not a url").is_err());
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(client.url("/notes"), "http://localhost:8000/api/notes");
    }

    #[test]
    fn test_url_building() {
        let client = ApiClient::new("http://localhost:8000/api").unwrap();
        assert_eq!(client.url("/notes/5"), "http://localhost:8000/api/notes/5");
        assert_eq!(
            client.url("/notes/5/translate"),
            "http://localhost:8000/api/notes/5/translate"
        );
    }
}
