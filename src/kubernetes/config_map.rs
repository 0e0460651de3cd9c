// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Loading the Lighthouse trigger configuration from its ConfigMap

use crate::constants::lighthouse::CONFIG_KEY;
use crate::error::{Result, WaitError};
use crate::types::TriggerConfig;
use k8s_openapi::api::core::v1::ConfigMap;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// Read and parse the trigger configuration held in ConfigMap `name`.
///
/// With `fail_if_missing` a missing ConfigMap or `config.yaml` key is an
/// error; without it both yield an empty configuration. Unparseable YAML
/// is always an error.
#[instrument(skip(client))]
pub async fn load_trigger_config(
    client: &Client,
    namespace: &str,
    name: &str,
    fail_if_missing: bool,
) -> Result<TriggerConfig> {
    let config_maps: Api<ConfigMap> = Api::namespaced(client.clone(), namespace);
    let fetch_error = |reason: String| WaitError::ConfigFetch {
        name: name.to_string(),
        namespace: namespace.to_string(),
        reason,
    };

    let config_map = match config_maps.get(name).await {
        Ok(cm) => cm,
        Err(kube::Error::Api(err)) if err.code == 404 => {
            if fail_if_missing {
                return Err(fetch_error("ConfigMap not found".to_string()));
            }
            debug!("ConfigMap {}/{} not found, using empty config", namespace, name);
            return Ok(TriggerConfig::default());
        }
        Err(e) => return Err(fetch_error(e.to_string())),
    };

    let Some(yaml) = config_map.data.as_ref().and_then(|d| d.get(CONFIG_KEY)) else {
        if fail_if_missing {
            return Err(fetch_error(format!("no {} key in ConfigMap", CONFIG_KEY)));
        }
        debug!("ConfigMap {}/{} has no {} key", namespace, name, CONFIG_KEY);
        return Ok(TriggerConfig::default());
    };

    TriggerConfig::from_yaml(yaml).map_err(|e| WaitError::ConfigParse {
        name: name.to_string(),
        namespace: namespace.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{config_map_json, status_json, MockService};

    const PATH: &str = "/api/v1/namespaces/jx/configmaps/config";

    #[tokio::test]
    async fn test_load_parses_config() {
        let client = MockService::new()
            .on_get(
                PATH,
                200,
                &config_map_json("config", "jx", Some("postsubmits:\n  acme/widgets: []\n")),
            )
            .into_client();

        let cfg = load_trigger_config(&client, "jx", "config", true).await.unwrap();
        assert!(cfg.postsubmits.contains_key("acme/widgets"));
    }

    #[tokio::test]
    async fn test_missing_config_map_strict() {
        let client = MockService::new().into_client();

        let result = load_trigger_config(&client, "jx", "config", true).await;
        assert!(matches!(result, Err(WaitError::ConfigFetch { .. })));
    }

    #[tokio::test]
    async fn test_missing_config_map_lenient() {
        let client = MockService::new().into_client();

        let cfg = load_trigger_config(&client, "jx", "config", false).await.unwrap();
        assert_eq!(cfg, TriggerConfig::default());
    }

    #[tokio::test]
    async fn test_missing_key_strict() {
        let client = MockService::new()
            .on_get(PATH, 200, &config_map_json("config", "jx", None))
            .into_client();

        let result = load_trigger_config(&client, "jx", "config", true).await;
        assert!(matches!(result, Err(WaitError::ConfigFetch { .. })));
    }

    #[tokio::test]
    async fn test_invalid_yaml() {
        let client = MockService::new()
            .on_get(PATH, 200, &config_map_json("config", "jx", Some("presubmits: [oops")))
            .into_client();

        let result = load_trigger_config(&client, "jx", "config", false).await;
        assert!(matches!(result, Err(WaitError::ConfigParse { .. })));
    }

    #[tokio::test]
    async fn test_forbidden_is_fetch_error() {
        let client = MockService::new()
            .on_get(PATH, 403, &status_json(403, "Forbidden", "configmaps \"config\" is forbidden"))
            .into_client();

        let err = load_trigger_config(&client, "jx", "config", false)
            .await
            .unwrap_err();
        assert!(matches!(err, WaitError::ConfigFetch { .. }));
        let message = err.to_string();
        assert!(message.contains("ConfigMap config in namespace jx"));
        assert!(message.contains("forbidden"));
    }
}
