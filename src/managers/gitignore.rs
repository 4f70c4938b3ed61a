//! Gitignore templates API
//!
//! Templates can be fetched either as a JSON record or, with the raw media
//! type, as the bare template source.

use crate::types::GitignoreTemplate;
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient, media};

pub struct GitignoreManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> GitignoreManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// Names of all templates, e.g. `Rust`, `Node`
    pub async fn list_templates(&self) -> Result<Vec<String>> {
        self.client
            .send_json(&Endpoint::get(["gitignore", "templates"]))
            .await
    }

    pub async fn get_template(&self, name: &str) -> Result<GitignoreTemplate> {
        self.client
            .send_json(&Endpoint::get(["gitignore", "templates", name]))
            .await
    }

    /// Template source as plain text
    pub async fn get_template_raw(&self, name: &str) -> Result<String> {
        let endpoint = Endpoint::get(["gitignore", "templates", name]).accept(media::RAW);
        self.client.send_text(&endpoint).await
    }
}
