// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Go-style duration strings ("20m", "2s", "1h30m", "500ms").

use crate::error::{Result, WaitError};
use std::time::Duration;

/// Parse a duration made of one or more `<integer><unit>` segments.
///
/// Units are `h`, `m`, `s` and `ms`. A bare `0` is accepted as zero.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return Err(WaitError::InvalidDuration("duration cannot be empty".to_string()));
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }

    let mut total = Duration::ZERO;
    let mut remaining = s;

    while !remaining.is_empty() {
        let num_end = remaining
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(remaining.len());
        if num_end == 0 {
            return Err(WaitError::InvalidDuration(format!(
                "expected a number at position {} in '{}'",
                s.len() - remaining.len(),
                s
            )));
        }
        let value: u64 = remaining[..num_end]
            .parse()
            .map_err(|_| WaitError::InvalidDuration(format!("invalid number in '{}'", s)))?;
        remaining = &remaining[num_end..];

        let unit_end = remaining
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(remaining.len());
        let segment = match &remaining[..unit_end] {
            "h" => value.checked_mul(3600).map(Duration::from_secs),
            "m" => value.checked_mul(60).map(Duration::from_secs),
            "s" => Some(Duration::from_secs(value)),
            "ms" => Some(Duration::from_millis(value)),
            "" => {
                return Err(WaitError::InvalidDuration(format!(
                    "missing unit suffix (h/m/s/ms) in '{}'",
                    s
                )))
            }
            unit => {
                return Err(WaitError::InvalidDuration(format!(
                    "invalid unit '{}' in '{}' (expected h, m, s or ms)",
                    unit, s
                )))
            }
        };
        total = segment
            .and_then(|segment| total.checked_add(segment))
            .ok_or_else(|| WaitError::InvalidDuration(format!("duration out of range: '{}'", s)))?;
        remaining = &remaining[unit_end..];
    }

    Ok(total)
}

/// Parse a poll period; unlike a wait duration it must be non-zero.
pub fn parse_poll_period(s: &str) -> Result<Duration> {
    let period = parse_duration(s)?;
    if period.is_zero() {
        return Err(WaitError::InvalidDuration(format!(
            "poll period must be greater than zero, got '{}'",
            s
        )));
    }
    Ok(period)
}

/// Render a duration in the same compact form `parse_duration` accepts.
pub fn format_duration(d: Duration) -> String {
    if d.is_zero() {
        return "0s".to_string();
    }

    let secs = d.as_secs();
    let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    let millis = d.subsec_millis();

    let mut out = String::new();
    if hours > 0 {
        out.push_str(&format!("{}h", hours));
    }
    if minutes > 0 {
        out.push_str(&format!("{}m", minutes));
    }
    if seconds > 0 {
        out.push_str(&format!("{}s", seconds));
    }
    if millis > 0 {
        out.push_str(&format!("{}ms", millis));
    }
    if out.is_empty() {
        // sub-millisecond
        out.push_str("0s");
    }
    out
}
