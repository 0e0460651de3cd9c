// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::wait::Phase;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WaitError {
    #[error("failed to load lighthouse config from ConfigMap {name} in namespace {namespace}: {reason}")]
    ConfigFetch {
        name: String,
        namespace: String,
        reason: String,
    },

    #[error("failed to parse lighthouse config in ConfigMap {name} in namespace {namespace}: {reason}")]
    ConfigParse {
        name: String,
        namespace: String,
        reason: String,
    },

    #[error("failed to find SourceRepository {name} in namespace {namespace}: {reason}")]
    ResourceFetch {
        name: String,
        namespace: String,
        reason: String,
    },

    #[error("timed out waiting for {phase} {target} in namespace {namespace} for repository: {repository} within {duration}")]
    Timeout {
        phase: Phase,
        target: String,
        namespace: String,
        repository: String,
        duration: String,
    },

    #[error("missing option: --{0}")]
    MissingOption(String),

    #[error("invalid duration: {0}")]
    InvalidDuration(String),
}

pub type Result<T> = std::result::Result<T, WaitError>;
