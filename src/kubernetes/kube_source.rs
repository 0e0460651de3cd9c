// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use super::{get_source_repository, load_trigger_config, FetchOutcome};
use crate::error::Result;
use crate::types::{SourceRepository, TriggerConfig};
use crate::wait::{RepositorySource, TriggerConfigSource};
use async_trait::async_trait;
use kube::Client;

/// Reads both wait inputs from the cluster.
///
/// The trigger configuration is always loaded strictly: a missing ConfigMap
/// is an error, not an empty configuration.
#[derive(Clone)]
pub struct KubeSource {
    client: Client,
}

impl KubeSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TriggerConfigSource for KubeSource {
    async fn load_trigger_config(&self, namespace: &str, name: &str) -> Result<TriggerConfig> {
        load_trigger_config(&self.client, namespace, name, true).await
    }
}

#[async_trait]
impl RepositorySource for KubeSource {
    async fn get_source_repository(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<FetchOutcome<SourceRepository>> {
        get_source_repository(&self.client, namespace, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WaitConfig;
    use crate::constants::annotations;
    use crate::test_utils::{config_map_json, source_repository_json, MockService};
    use crate::wait::report::{RecordingReporter, ReportEvent};
    use crate::wait::WaitOrchestrator;
    use std::time::Duration;

    #[tokio::test]
    async fn test_wait_against_mock_cluster() {
        let client = MockService::new()
            .on_get(
                "/api/v1/namespaces/jx/configmaps/config",
                200,
                &config_map_json(
                    "config",
                    "jx",
                    Some("in_repo_config:\n  enabled:\n    acme/widgets: true\n"),
                ),
            )
            .on_get(
                "/apis/jenkins.io/v1/namespaces/jx/sourcerepositories/acme-widgets",
                200,
                &source_repository_json("acme-widgets", "jx", &[(annotations::WEBHOOK_STATUS, "true")]),
            )
            .into_client();
        let source = KubeSource::new(client);
        let config = WaitConfig::new(
            Some("acme".to_string()),
            Some("widgets".to_string()),
            "jx".to_string(),
            "config".to_string(),
            Duration::from_secs(60),
            Duration::from_secs(2),
        )
        .unwrap();
        let reporter = RecordingReporter::default();

        WaitOrchestrator::new(config, source.clone(), source, &reporter)
            .run()
            .await
            .unwrap();

        assert_eq!(
            reporter.events(),
            vec![
                ReportEvent::FoundResource {
                    name: "acme-widgets".to_string()
                },
                ReportEvent::StatusChanged("true".to_string()),
                ReportEvent::Ready("acme/widgets".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_config_map_fails_fast() {
        let source = KubeSource::new(MockService::new().into_client());

        let result = TriggerConfigSource::load_trigger_config(&source, "jx", "config").await;
        assert!(matches!(
            result,
            Err(crate::error::WaitError::ConfigFetch { .. })
        ));
    }
}
