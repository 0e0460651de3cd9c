// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes reads: the Lighthouse ConfigMap and SourceRepository resources.

pub mod config_map;
pub mod kube_source;
pub mod source_repository;

pub use config_map::load_trigger_config;
pub use kube_source::KubeSource;
pub use source_repository::{get_source_repository, FetchOutcome};
