//! Testing utilities including mock implementations.
//!
//! Useful for testing applications that use the discovery library without
//! making real model or network calls.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, RwLock};

use crate::error::{ExtractionError, Result};
use crate::traits::{ai::LanguageModel, fetcher::ContentFetcher};
use crate::types::page::FetchedPage;

/// A mock language model for testing.
///
/// Responses are chosen by the first matching prompt rule, otherwise taken
/// from a FIFO queue. With nothing configured, `complete` fails.
#[derive(Default, Clone)]
pub struct MockLanguageModel {
    /// (prompt substring, response) rules, checked in insertion order
    rules: Arc<RwLock<Vec<(String, String)>>>,

    /// Queued responses for prompts no rule matched
    queue: Arc<RwLock<VecDeque<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<MockCompletionCall>>>,
}

/// Record of a call made to the mock model.
#[derive(Debug, Clone)]
pub struct MockCompletionCall {
    pub prompt: String,
    pub model: String,
}

impl MockLanguageModel {
    /// Create a new mock with no canned responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unmatched prompt.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.queue.write().unwrap().push_back(response.into());
        self
    }

    /// Answer every prompt containing `needle` with `response`.
    pub fn when_prompt_contains(self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.rules
            .write()
            .unwrap()
            .push((needle.into(), response.into()));
        self
    }

    /// Get all calls made to this mock.
    pub fn calls(&self) -> Vec<MockCompletionCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of completions requested.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl LanguageModel for MockLanguageModel {
    async fn complete(&self, prompt: &str, model: &str) -> Result<String> {
        self.calls.write().unwrap().push(MockCompletionCall {
            prompt: prompt.to_string(),
            model: model.to_string(),
        });

        let matched = self
            .rules
            .read()
            .unwrap()
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone());

        if let Some(response) = matched {
            return Ok(response);
        }

        self.queue
            .write()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ExtractionError::LanguageModel("mock has no canned response".into()))
    }
}

/// A mock content fetcher for testing.
///
/// Serves canned pages by exact URL; unknown URLs return no content.
#[derive(Default, Clone)]
pub struct MockFetcher {
    /// Canned pages indexed by URL
    pages: Arc<RwLock<HashMap<String, FetchedPage>>>,

    /// URLs requested, in order
    fetch_calls: Arc<RwLock<Vec<String>>>,
}

impl MockFetcher {
    /// Create a new empty mock fetcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `html` at `url`, normalized the same way `HttpFetcher` does.
    pub fn with_html(self, url: impl Into<String>, html: impl Into<String>) -> Self {
        let url = url.into();
        let page = FetchedPage::from_html(url.clone(), html);
        self.pages.write().unwrap().insert(url, page);
        self
    }

    /// Number of fetches performed.
    pub fn fetch_call_count(&self) -> usize {
        self.fetch_calls.read().unwrap().len()
    }

    /// URLs requested, in order.
    pub fn fetch_calls(&self) -> Vec<String> {
        self.fetch_calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Option<FetchedPage> {
        self.fetch_calls.write().unwrap().push(url.to_string());
        self.pages.read().unwrap().get(url).cloned()
    }

    fn name(&self) -> &str {
        "mock"
    }
}
