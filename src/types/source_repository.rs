// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{annotations, source_repository::MAX_NAME_LENGTH};
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "jenkins.io", version = "v1", kind = "SourceRepository")]
#[kube(namespaced)]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct SourceRepositorySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "httpCloneURL", skip_serializing_if = "Option::is_none")]
    pub http_clone_url: Option<String>,
    #[serde(rename = "sshCloneURL", skip_serializing_if = "Option::is_none")]
    pub ssh_clone_url: Option<String>,
}

impl SourceRepository {
    /// Name of the SourceRepository created for `owner/repo`
    pub fn resource_name(owner: &str, repo: &str) -> String {
        to_valid_name(&format!("{}-{}", owner, repo))
    }

    /// Webhook registration status, ignoring an empty annotation
    pub fn webhook_status(&self) -> Option<&str> {
        self.non_empty_annotation(annotations::WEBHOOK_STATUS)
    }

    /// Error detail recorded alongside a failed registration
    pub fn webhook_error(&self) -> Option<&str> {
        self.non_empty_annotation(annotations::WEBHOOK_ERROR)
    }

    /// Best URL to show for this repository
    pub fn display_url(&self) -> &str {
        self.spec
            .url
            .as_deref()
            .or(self.spec.http_clone_url.as_deref())
            .unwrap_or_default()
    }

    fn non_empty_annotation(&self, key: &str) -> Option<&str> {
        self.annotations()
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }
}

/// Convert an arbitrary string into a valid Kubernetes object name.
///
/// ASCII letters and digits are lowercased and kept, every run of other
/// characters collapses to a single `-`, and the result never starts or
/// ends with `-` or exceeds 63 characters.
pub fn to_valid_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if out.len() > MAX_NAME_LENGTH {
        out.truncate(MAX_NAME_LENGTH);
        while out.ends_with('-') {
            out.pop();
        }
    }
    out
}
