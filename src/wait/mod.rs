// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Readiness wait: poll for a Lighthouse trigger, then for webhook registration.

pub mod orchestrator;
pub mod poll;
pub mod report;
pub mod trigger;
pub mod webhook;

pub use orchestrator::{RepositorySource, TriggerConfigSource, WaitOrchestrator};
pub use poll::{deadline_after, poll_until, Check};
pub use report::{TracingReporter, WaitReporter};
pub use trigger::trigger_registered;
pub use webhook::{evaluate, transitions, WebhookChange, WebhookOutcome, WebhookState};

use crate::duration::format_duration;
use crate::error::WaitError;
use std::fmt;
use std::time::Duration;

/// The two poll phases of a wait
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Trigger,
    Webhook,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Trigger => write!(f, "a trigger in the lighthouse configuration in ConfigMap"),
            Phase::Webhook => write!(f, "the webhook to be registered for SourceRepository"),
        }
    }
}

/// What a phase is waiting on, used for progress lines and timeout errors.
#[derive(Debug, Clone)]
pub struct PhaseTarget {
    pub phase: Phase,
    /// ConfigMap or SourceRepository name
    pub target: String,
    pub namespace: String,
    /// Fully-qualified "owner/repo"
    pub repository: String,
    pub duration: Duration,
}

impl PhaseTarget {
    pub fn timeout_error(&self) -> WaitError {
        WaitError::Timeout {
            phase: self.phase,
            target: self.target.clone(),
            namespace: self.namespace.clone(),
            repository: self.repository.clone(),
            duration: format_duration(self.duration),
        }
    }
}
