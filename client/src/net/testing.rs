//! Scripted in-memory backend for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use futures::channel::oneshot;
use serde_json::Value;

use super::api::ApiError;
use super::backend::{ApiRequest, Backend};

#[derive(Default)]
struct Script {
    replies: HashMap<String, VecDeque<Result<Value, ApiError>>>,
    held: HashMap<String, VecDeque<oneshot::Receiver<Value>>>,
    requests: Vec<ApiRequest>,
}

/// Replays queued replies per route and records every request it sees.
///
/// Routes without a queued reply fail with `ApiError::Network`.
#[derive(Clone, Default)]
pub(crate) struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
}

impl ScriptedBackend {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON envelope for the next request to `route`.
    pub(crate) fn reply(&self, route: &str, body: Value) -> &Self {
        self.push(route, Ok(body))
    }

    /// Queue a transport failure for the next request to `route`.
    pub(crate) fn fail(&self, route: &str) -> &Self {
        self.push(route, Err(ApiError::Network("connection refused".to_owned())))
    }

    fn push(&self, route: &str, reply: Result<Value, ApiError>) -> &Self {
        self.script.lock().unwrap().replies.entry(route.to_owned()).or_default().push_back(reply);
        self
    }

    /// Park the next request to `route` until the returned sender fires.
    ///
    /// Dropping the sender resolves the request as a network failure.
    pub(crate) fn hold(&self, route: &str) -> oneshot::Sender<Value> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().held.entry(route.to_owned()).or_default().push_back(rx);
        tx
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().requests.clone()
    }

    /// Routes hit so far, in order.
    pub(crate) fn routes(&self) -> Vec<String> {
        self.requests().iter().map(|r| r.route().to_owned()).collect()
    }

    pub(crate) fn calls_to(&self, route: &str) -> usize {
        self.requests().iter().filter(|r| r.route() == route).count()
    }
}

impl Backend for ScriptedBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let route = request.route().to_owned();
        let held = {
            let mut script = self.script.lock().unwrap();
            script.requests.push(request);
            match script.held.get_mut(&route).and_then(VecDeque::pop_front) {
                Some(rx) => rx,
                None => {
                    return script
                        .replies
                        .get_mut(&route)
                        .and_then(VecDeque::pop_front)
                        .unwrap_or_else(|| Err(ApiError::Network(format!("no scripted reply for {route}"))));
                }
            }
        };
        held.await.map_err(|_| ApiError::Network(format!("held reply for {route} was dropped")))
    }
}
