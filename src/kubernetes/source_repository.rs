// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! SourceRepository lookup

use crate::error::{Result, WaitError};
use crate::types::SourceRepository;
use kube::{Api, Client};
use tracing::{debug, instrument};

/// A read that treats "not found" as an expected answer rather than an error
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome<T> {
    Found(T),
    Absent,
}

impl<T> FetchOutcome<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchOutcome::Found(t) => Some(t),
            FetchOutcome::Absent => None,
        }
    }
}

/// Get the SourceRepository `name`; a 404 is [`FetchOutcome::Absent`].
#[instrument(skip(client))]
pub async fn get_source_repository(
    client: &Client,
    namespace: &str,
    name: &str,
) -> Result<FetchOutcome<SourceRepository>> {
    let repositories: Api<SourceRepository> = Api::namespaced(client.clone(), namespace);

    match repositories.get(name).await {
        Ok(sr) => Ok(FetchOutcome::Found(sr)),
        Err(kube::Error::Api(err)) if err.code == 404 => {
            debug!("SourceRepository {}/{} does not exist yet", namespace, name);
            Ok(FetchOutcome::Absent)
        }
        Err(e) => Err(WaitError::ResourceFetch {
            name: name.to_string(),
            namespace: namespace.to_string(),
            reason: e.to_string(),
        }),
    }
}
