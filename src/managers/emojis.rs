//! Emojis API

use crate::types::Emojis;
use anyhow::Result;
use gh_rest::{Endpoint, GitHubClient};

pub struct EmojisManager<'a> {
    client: &'a GitHubClient,
}

impl<'a> EmojisManager<'a> {
    pub fn new(client: &'a GitHubClient) -> Self {
        Self { client }
    }

    /// All emojis available in GitHub markdown, mapped to their image URLs
    pub async fn get_emojis(&self) -> Result<Emojis> {
        self.client.send_json(&Endpoint::get(["emojis"])).await
    }
}
