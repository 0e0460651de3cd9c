// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Annotation keys written on SourceRepository resources by the webhook controller
pub mod annotations {
    /// Webhook registration status: "true" once registered, "err..." on failure
    pub const WEBHOOK_STATUS: &str = "webhook.jenkins-x.io";
    /// Free-form detail accompanying an error status
    pub const WEBHOOK_ERROR: &str = "webhook.jenkins-x.io/error";
}

/// Lighthouse trigger configuration
pub mod lighthouse {
    /// Default name of the ConfigMap holding the trigger configuration
    pub const CONFIG_MAP_NAME: &str = "config";
    /// Data key inside the ConfigMap that holds the YAML configuration
    pub const CONFIG_KEY: &str = "config.yaml";
}

/// SourceRepository custom resource coordinates
pub mod source_repository {
    pub const GROUP: &str = "jenkins.io";
    pub const VERSION: &str = "v1";
    /// Kubernetes object names are DNS labels
    pub const MAX_NAME_LENGTH: usize = 63;
}

/// Wait defaults, as Go-style duration strings
pub mod wait {
    pub const DEFAULT_DURATION: &str = "20m";
    pub const DEFAULT_POLL_PERIOD: &str = "2s";
}
