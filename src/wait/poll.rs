// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fixed-interval polling against an absolute deadline.

use super::report::WaitReporter;
use super::PhaseTarget;
use crate::error::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Outcome of one successful observation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Ready,
    NotYet,
}

/// Roughly thirty years; stands in for "never" when `now + duration` overflows.
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// The absolute deadline for a phase that starts now and lasts `duration`.
pub fn deadline_after(duration: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(duration).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Run `check` every `interval` until it reports [`Check::Ready`] or `deadline` passes.
///
/// The first check always runs, even when the deadline is already behind us.
/// An `Err` from `check` is unrecoverable and returned as-is. The reporter
/// hears about the wait once, just before the first sleep.
pub async fn poll_until<F, Fut, R>(
    target: &PhaseTarget,
    deadline: Instant,
    interval: Duration,
    reporter: &R,
    mut check: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<Check>>,
    R: WaitReporter + ?Sized,
{
    let mut logged_waiting = false;

    loop {
        if check().await? == Check::Ready {
            return Ok(());
        }

        if Instant::now() > deadline {
            return Err(target.timeout_error());
        }

        if !logged_waiting {
            logged_waiting = true;
            reporter.waiting(target);
        }

        sleep(interval).await;
    }
}
