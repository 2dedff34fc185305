//! In-memory transport for tests

use async_trait::async_trait;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};

use super::{FetchError, Transport};

/// Scripted responses keyed by URL; the last scripted response repeats
#[derive(Default)]
pub struct MockTransport {
    gets: RefCell<HashMap<String, VecDeque<Result<Value, FetchError>>>>,
    stalled: RefCell<HashSet<String>>,
    puts: RefCell<HashMap<String, Result<(), FetchError>>>,
    pub get_log: RefCell<Vec<String>>,
    pub put_log: RefCell<Vec<(String, Value)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_get(self, url: &str, response: Result<Value, FetchError>) -> Self {
        self.gets
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(response);
        self
    }

    /// GETs to `url` never complete
    pub fn on_get_stalled(self, url: &str) -> Self {
        self.stalled.borrow_mut().insert(url.to_string());
        self
    }

    pub fn on_put(self, url: &str, response: Result<(), FetchError>) -> Self {
        self.puts.borrow_mut().insert(url.to_string(), response);
        self
    }

    pub fn get_count(&self, url: &str) -> usize {
        self.get_log.borrow().iter().filter(|u| *u == url).count()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.get_log.borrow_mut().push(url.to_string());

        if self.stalled.borrow().contains(url) {
            std::future::pending::<()>().await;
        }

        let mut gets = self.gets.borrow_mut();
        let queue = gets
            .get_mut(url)
            .ok_or_else(|| FetchError::Network(format!("no route to {}", url)))?;
        if queue.len() > 1 {
            queue
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("empty script".into())))
        } else {
            queue
                .front()
                .cloned()
                .unwrap_or_else(|| Err(FetchError::Network("empty script".into())))
        }
    }

    async fn put_json(&self, url: &str, body: &Value) -> Result<(), FetchError> {
        self.put_log
            .borrow_mut()
            .push((url.to_string(), body.clone()));

        self.puts
            .borrow()
            .get(url)
            .cloned()
            .unwrap_or_else(|| {
                Err(FetchError::Http {
                    status: 404,
                    detail: String::new(),
                })
            })
    }
}
