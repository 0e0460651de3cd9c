// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sequences the trigger phase and the webhook phase of a wait.

use super::poll::{deadline_after, poll_until, Check};
use super::report::WaitReporter;
use super::trigger::trigger_registered;
use super::webhook::{evaluate, transitions, WebhookChange, WebhookState};
use super::{Phase, PhaseTarget};
use crate::config::WaitConfig;
use crate::error::Result;
use crate::kubernetes::FetchOutcome;
use crate::types::{SourceRepository, TriggerConfig};
use async_trait::async_trait;
use kube::ResourceExt;
use std::cell::RefCell;
use tracing::{debug, instrument};

/// Where the Lighthouse trigger configuration comes from
#[async_trait]
pub trait TriggerConfigSource {
    async fn load_trigger_config(&self, namespace: &str, name: &str) -> Result<TriggerConfig>;
}

/// Where SourceRepository resources come from
#[async_trait]
pub trait RepositorySource {
    async fn get_source_repository(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<FetchOutcome<SourceRepository>>;
}

#[async_trait]
impl<T: TriggerConfigSource + Sync + ?Sized> TriggerConfigSource for &T {
    async fn load_trigger_config(&self, namespace: &str, name: &str) -> Result<TriggerConfig> {
        (**self).load_trigger_config(namespace, name).await
    }
}

#[async_trait]
impl<T: RepositorySource + Sync + ?Sized> RepositorySource for &T {
    async fn get_source_repository(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<FetchOutcome<SourceRepository>> {
        (**self).get_source_repository(namespace, name).await
    }
}

/// Waits until a repository has a Lighthouse trigger and then a registered webhook.
///
/// Each phase gets its own deadline of `wait_duration`, computed when the
/// phase starts. The webhook phase never starts if the trigger phase fails.
pub struct WaitOrchestrator<C, S, R> {
    config: WaitConfig,
    triggers: C,
    repositories: S,
    reporter: R,
}

impl<C, S, R> WaitOrchestrator<C, S, R>
where
    C: TriggerConfigSource,
    S: RepositorySource,
    R: WaitReporter,
{
    pub fn new(config: WaitConfig, triggers: C, repositories: S, reporter: R) -> Self {
        Self {
            config,
            triggers,
            repositories,
            reporter,
        }
    }

    #[instrument(skip(self), fields(repository = %self.config.full_name(), namespace = %self.config.namespace))]
    pub async fn run(&self) -> Result<()> {
        let full_name = self.config.full_name();

        self.wait_for_trigger(&full_name).await?;
        debug!("trigger found, waiting for webhook");

        self.wait_for_webhook(&full_name).await?;

        self.reporter.ready(&full_name);
        Ok(())
    }

    async fn wait_for_trigger(&self, full_name: &str) -> Result<()> {
        let target = PhaseTarget {
            phase: Phase::Trigger,
            target: self.config.config_map.clone(),
            namespace: self.config.namespace.clone(),
            repository: full_name.to_string(),
            duration: self.config.wait_duration,
        };
        let deadline = deadline_after(self.config.wait_duration);

        poll_until(
            &target,
            deadline,
            self.config.poll_period,
            &self.reporter,
            move || self.check_trigger(full_name),
        )
        .await
    }

    async fn check_trigger(&self, full_name: &str) -> Result<Check> {
        let cfg = self
            .triggers
            .load_trigger_config(&self.config.namespace, &self.config.config_map)
            .await?;

        Ok(if trigger_registered(&cfg, full_name) {
            Check::Ready
        } else {
            Check::NotYet
        })
    }

    async fn wait_for_webhook(&self, full_name: &str) -> Result<()> {
        let name = self.config.source_repository_name();
        let target = PhaseTarget {
            phase: Phase::Webhook,
            target: name.clone(),
            namespace: self.config.namespace.clone(),
            repository: full_name.to_string(),
            duration: self.config.wait_duration,
        };
        let deadline = deadline_after(self.config.wait_duration);
        let state = RefCell::new(WebhookState::default());
        let (name, state) = (name.as_str(), &state);

        poll_until(
            &target,
            deadline,
            self.config.poll_period,
            &self.reporter,
            move || self.check_webhook(name, state),
        )
        .await
    }

    async fn check_webhook(&self, name: &str, state: &RefCell<WebhookState>) -> Result<Check> {
        let fetched = self
            .repositories
            .get_source_repository(&self.config.namespace, name)
            .await?;

        let previous = state.take();
        let (outcome, next) = evaluate(fetched.as_ref(), &previous);
        for change in transitions(&previous, &next) {
            match change {
                WebhookChange::Found => {
                    if let Some(sr) = fetched.as_ref() {
                        self.reporter.found_resource(&sr.name_any(), sr.display_url());
                    }
                }
                WebhookChange::Status(value) => self.reporter.status_changed(value),
                WebhookChange::Failure(message) => self.reporter.registration_failed(message),
            }
        }
        debug!(?outcome, "observed webhook status");
        state.replace(next);

        Ok(if outcome.is_success() {
            Check::Ready
        } else {
            Check::NotYet
        })
    }
}
