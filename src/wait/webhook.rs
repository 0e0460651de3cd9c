// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Classification of the webhook registration annotations on a SourceRepository.

use crate::types::SourceRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The SourceRepository does not exist yet
    NotFound,
    /// The resource exists but carries no status yet
    Pending,
    /// Status is the literal "true"
    Success,
    /// Status starts with "err" (any case); registration may still recover
    Failed { message: Option<String> },
    /// A status value we do not recognise; treated like `Pending`
    Unknown(String),
}

impl WebhookOutcome {
    /// Only a successful registration ends the webhook phase
    pub fn is_success(&self) -> bool {
        matches!(self, WebhookOutcome::Success)
    }
}

/// Last observed values, kept so every distinct value is reported once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebhookState {
    pub found: bool,
    pub last_value: Option<String>,
    pub last_failure: Option<String>,
}

/// Something new observed between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookChange<'a> {
    Found,
    Status(&'a str),
    Failure(&'a str),
}

/// Classify the current observation and fold it into the previous state.
pub fn evaluate(
    resource: Option<&SourceRepository>,
    previous: &WebhookState,
) -> (WebhookOutcome, WebhookState) {
    let Some(sr) = resource else {
        return (WebhookOutcome::NotFound, previous.clone());
    };

    let mut next = WebhookState {
        found: true,
        ..previous.clone()
    };

    let Some(value) = sr.webhook_status() else {
        return (WebhookOutcome::Pending, next);
    };
    next.last_value = Some(value.to_string());

    let outcome = if value == "true" {
        WebhookOutcome::Success
    } else if value.to_lowercase().starts_with("err") {
        let message = sr.webhook_error().map(str::to_string);
        if message.is_some() {
            next.last_failure = message.clone();
        }
        WebhookOutcome::Failed { message }
    } else {
        WebhookOutcome::Unknown(value.to_string())
    };

    (outcome, next)
}

/// The changes between two consecutive states, in reporting order.
pub fn transitions<'a>(previous: &WebhookState, next: &'a WebhookState) -> Vec<WebhookChange<'a>> {
    let mut changes = Vec::new();
    if next.found && !previous.found {
        changes.push(WebhookChange::Found);
    }
    if let Some(value) = next.last_value.as_deref() {
        if previous.last_value.as_deref() != Some(value) {
            changes.push(WebhookChange::Status(value));
        }
    }
    if let Some(failure) = next.last_failure.as_deref() {
        if previous.last_failure.as_deref() != Some(failure) {
            changes.push(WebhookChange::Failure(failure));
        }
    }
    changes
}
