// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Lighthouse trigger configuration, as stored in the `config.yaml` key of its ConfigMap.
//!
//! Only the parts needed to decide whether a repository has a trigger are modelled;
//! job definitions are kept as opaque YAML values and unknown keys are ignored.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TriggerConfig {
    /// Presubmit jobs keyed by "owner/repo"
    #[serde(default, deserialize_with = "null_as_default")]
    pub presubmits: BTreeMap<String, serde_yaml::Value>,
    /// Postsubmit jobs keyed by "owner/repo"
    #[serde(default, deserialize_with = "null_as_default")]
    pub postsubmits: BTreeMap<String, serde_yaml::Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_repo_config: InRepoConfig,
}

#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct InRepoConfig {
    /// Per-repository override; a stored `false` disables the repository
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: BTreeMap<String, bool>,
}

/// Result of looking a repository up in the trigger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerLookup {
    /// The repository has presubmit or postsubmit jobs
    Direct,
    /// No jobs, but the in-repo config map holds an entry with this value
    InRepo(bool),
    /// Neither map knows the repository
    Absent,
}

impl TriggerConfig {
    /// Parse the YAML payload; an empty document is an empty configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Look a fully-qualified "owner/repo" name up, direct maps first.
    pub fn lookup(&self, full_name: &str) -> TriggerLookup {
        if self.presubmits.contains_key(full_name) || self.postsubmits.contains_key(full_name) {
            return TriggerLookup::Direct;
        }
        match self.in_repo_config.enabled.get(full_name) {
            Some(enabled) => TriggerLookup::InRepo(*enabled),
            None => TriggerLookup::Absent,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
