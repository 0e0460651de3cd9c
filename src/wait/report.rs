// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! User-facing progress lines emitted while waiting.

use super::{Phase, PhaseTarget};
use crate::duration::format_duration;
use tracing::{info, warn};

/// Sink for the handful of progress messages a wait produces.
pub trait WaitReporter {
    /// A phase is about to start retrying
    fn waiting(&self, target: &PhaseTarget);
    /// The SourceRepository was seen for the first time
    fn found_resource(&self, name: &str, url: &str);
    /// The webhook status annotation took a new value
    fn status_changed(&self, value: &str);
    /// The webhook controller reported a new error detail
    fn registration_failed(&self, message: &str);
    /// Both phases completed
    fn ready(&self, repository: &str);
}

/// Reporter that writes through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl WaitReporter for TracingReporter {
    fn waiting(&self, target: &PhaseTarget) {
        let duration = format_duration(target.duration);
        match target.phase {
            Phase::Trigger => info!(
                "waiting up to {} for a trigger to be added to the lighthouse configuration in ConfigMap {} in namespace {} for repository: {}",
                duration, target.target, target.namespace, target.repository
            ),
            Phase::Webhook => info!(
                "waiting up to {} for the webhook to be registered for the SourceRepository {} in namespace {} for repository: {}",
                duration, target.target, target.namespace, target.repository
            ),
        }
    }

    fn found_resource(&self, name: &str, url: &str) {
        info!("found SourceRepository {} for {}", name, url);
    }

    fn status_changed(&self, value: &str) {
        info!("webhook status annotation is: {}", value);
    }

    fn registration_failed(&self, message: &str) {
        warn!("when creating webhook: {}", message);
    }

    fn ready(&self, repository: &str) {
        info!(
            "the repository {} is now setup in lighthouse and has its webhook enabled",
            repository
        );
    }
}

impl<R: WaitReporter + ?Sized> WaitReporter for &R {
    fn waiting(&self, target: &PhaseTarget) {
        (**self).waiting(target)
    }

    fn found_resource(&self, name: &str, url: &str) {
        (**self).found_resource(name, url)
    }

    fn status_changed(&self, value: &str) {
        (**self).status_changed(value)
    }

    fn registration_failed(&self, message: &str) {
        (**self).registration_failed(message)
    }

    fn ready(&self, repository: &str) {
        (**self).ready(repository)
    }
}

#[cfg(test)]
pub use recording::{RecordingReporter, ReportEvent};

#[cfg(test)]
mod recording {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ReportEvent {
        Waiting { phase: Phase },
        FoundResource { name: String },
        StatusChanged(String),
        RegistrationFailed(String),
        Ready(String),
    }

    /// Reporter that keeps every event for later assertions
    #[derive(Debug, Default)]
    pub struct RecordingReporter {
        events: Mutex<Vec<ReportEvent>>,
    }

    impl RecordingReporter {
        pub fn events(&self) -> Vec<ReportEvent> {
            self.events.lock().unwrap().clone()
        }

        fn push(&self, event: ReportEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl WaitReporter for RecordingReporter {
        fn waiting(&self, target: &PhaseTarget) {
            self.push(ReportEvent::Waiting {
                phase: target.phase,
            });
        }

        fn found_resource(&self, name: &str, _url: &str) {
            self.push(ReportEvent::FoundResource {
                name: name.to_string(),
            });
        }

        fn status_changed(&self, value: &str) {
            self.push(ReportEvent::StatusChanged(value.to_string()));
        }

        fn registration_failed(&self, message: &str) {
            self.push(ReportEvent::RegistrationFailed(message.to_string()));
        }

        fn ready(&self, repository: &str) {
            self.push(ReportEvent::Ready(repository.to_string()));
        }
    }
}
