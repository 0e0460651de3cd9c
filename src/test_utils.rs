// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use crate::constants::{lighthouse::CONFIG_KEY, source_repository};
use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A mock HTTP service that returns predefined responses for GET request paths.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<String, (u16, String)>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
        self
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let response = if *req.method() == http::Method::GET {
            self.responses
                .lock()
                .unwrap()
                .get(req.uri().path())
                .cloned()
        } else {
            None
        };

        Box::pin(async move {
            // Unmatched requests are 404s, like a missing object
            let (status, body) = response.unwrap_or_else(|| (404, not_found_json("object", "unknown")));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a ConfigMap JSON response, optionally carrying a `config.yaml` payload
pub fn config_map_json(name: &str, namespace: &str, config_yaml: Option<&str>) -> String {
    let mut cm = serde_json::json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid"
        }
    });
    if let Some(yaml) = config_yaml {
        cm["data"] = serde_json::json!({});
        cm["data"][CONFIG_KEY] = serde_json::Value::String(yaml.to_string());
    }
    cm.to_string()
}

/// Create a SourceRepository JSON response with the given annotations
pub fn source_repository_json(name: &str, namespace: &str, annotations: &[(&str, &str)]) -> String {
    let annotations: serde_json::Map<String, serde_json::Value> = annotations
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();

    serde_json::json!({
        "apiVersion": format!("{}/{}", source_repository::GROUP, source_repository::VERSION),
        "kind": "SourceRepository",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "test-uid",
            "annotations": annotations
        },
        "spec": {
            "org": "acme",
            "repo": "widgets",
            "provider": "https://github.com",
            "url": "https://github.com/acme/widgets",
            "httpCloneURL": "https://github.com/acme/widgets.git"
        }
    })
    .to_string()
}

/// Create an API Status failure body
pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}
