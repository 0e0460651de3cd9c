// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command-line surface

use crate::config::WaitConfig;
use crate::constants::{lighthouse, wait};
use crate::duration::{parse_duration, parse_poll_period};
use crate::kubernetes::KubeSource;
use crate::wait::{TracingReporter, WaitOrchestrator};
use anyhow::{Context, Result};
use clap::Parser;
use kube::Client;
use std::time::Duration;
use tracing::info;

/// Waits for a repository to be imported into Lighthouse and have its webhook registered
#[derive(Parser, Debug)]
#[command(name = "pipeline-wait", version)]
pub struct Cli {
    /// The owner name to wait for
    #[arg(short = 'o', long, env = "PIPELINE_WAIT_OWNER")]
    pub owner: Option<String>,

    /// The repository name to wait for
    #[arg(short = 'r', long = "repo", env = "PIPELINE_WAIT_REPO")]
    pub repository: Option<String>,

    /// The namespace to look for the lighthouse configuration. Defaults to the current namespace
    #[arg(short = 'n', long)]
    pub namespace: Option<String>,

    /// The name of the Lighthouse ConfigMap to find the trigger configurations
    #[arg(long = "configmap", default_value = lighthouse::CONFIG_MAP_NAME)]
    pub config_map: String,

    /// Maximum duration to wait for each of the trigger and the webhook
    #[arg(long, default_value = wait::DEFAULT_DURATION, value_parser = parse_duration)]
    pub duration: Duration,

    /// Poll period while waiting
    #[arg(long, default_value = wait::DEFAULT_POLL_PERIOD, value_parser = parse_poll_period)]
    pub poll_period: Duration,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        // Reject missing owner/repo before touching the cluster
        let mut config = WaitConfig::new(
            self.owner,
            self.repository,
            self.namespace.clone().unwrap_or_default(),
            self.config_map,
            self.duration,
            self.poll_period,
        )
        .context("failed to validate options")?;

        let client = Client::try_default()
            .await
            .context("failed to create kube client")?;
        if self.namespace.is_none() {
            config.namespace = client.default_namespace().to_string();
        }
        info!(
            "Waiting for {} in namespace {}",
            config.full_name(),
            config.namespace
        );

        let full_name = config.full_name();
        let source = KubeSource::new(client);
        WaitOrchestrator::new(config, source.clone(), source, TracingReporter)
            .run()
            .await
            .with_context(|| format!("failed to wait for repository {} to be setup", full_name))?;

        Ok(())
    }
}
