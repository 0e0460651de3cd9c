// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::error::{Result, WaitError};
use crate::types::SourceRepository;
use std::time::Duration;

/// Validated options for a single wait
#[derive(Debug, Clone)]
pub struct WaitConfig {
    pub owner: String,
    pub repository: String,
    /// Namespace holding both the Lighthouse ConfigMap and the SourceRepository
    pub namespace: String,
    pub config_map: String,
    /// Applied separately to each phase
    pub wait_duration: Duration,
    pub poll_period: Duration,
}

impl WaitConfig {
    pub fn new(
        owner: Option<String>,
        repository: Option<String>,
        namespace: String,
        config_map: String,
        wait_duration: Duration,
        poll_period: Duration,
    ) -> Result<Self> {
        let owner = owner
            .filter(|o| !o.is_empty())
            .ok_or_else(|| WaitError::MissingOption("owner".to_string()))?;
        let repository = repository
            .filter(|r| !r.is_empty())
            .ok_or_else(|| WaitError::MissingOption("repo".to_string()))?;
        if poll_period.is_zero() {
            return Err(WaitError::InvalidDuration(
                "poll period must be greater than zero".to_string(),
            ));
        }

        Ok(WaitConfig {
            owner,
            repository,
            namespace,
            config_map,
            wait_duration,
            poll_period,
        })
    }

    /// "owner/repo", the key used by the Lighthouse configuration
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repository)
    }

    pub fn source_repository_name(&self) -> String {
        SourceRepository::resource_name(&self.owner, &self.repository)
    }
}
