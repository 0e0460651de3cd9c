// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resource types observed while waiting.

pub mod source_repository;
pub mod trigger_config;

pub use source_repository::{to_valid_name, SourceRepository, SourceRepositorySpec};
pub use trigger_config::{TriggerConfig, TriggerLookup};
