// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::types::{TriggerConfig, TriggerLookup};

/// Whether Lighthouse already has a trigger for the "owner/repo" `full_name`.
///
/// Jobs in the presubmit or postsubmit maps always count. Otherwise the
/// in-repo config entry decides, and a stored `false` means no trigger.
pub fn trigger_registered(config: &TriggerConfig, full_name: &str) -> bool {
    match config.lookup(full_name) {
        TriggerLookup::Direct => true,
        TriggerLookup::InRepo(enabled) => enabled,
        TriggerLookup::Absent => false,
    }
}
