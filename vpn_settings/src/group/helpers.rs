//! Field-level precedence and validation helpers shared by setting groups.
//!
//! A scalar field is unset when it is `None`; a list field is unset when it
//! is empty.

use std::net::IpAddr;
use std::time::Duration;

use crate::GroupError;

/// Take `other` only when `existing` is unset.
pub fn merge_option<T>(existing: &mut Option<T>, other: Option<T>) {
    if existing.is_none() {
        *existing = other;
    }
}

/// Take `other` whenever it is set.
pub fn override_option<T>(existing: &mut Option<T>, other: Option<T>) {
    if other.is_some() {
        *existing = other;
    }
}

/// Take `other` only when `existing` is empty.
pub fn merge_vec<T>(existing: &mut Vec<T>, other: Vec<T>) {
    if existing.is_empty() {
        *existing = other;
    }
}

/// Take `other` whenever it is non-empty.
pub fn override_vec<T>(existing: &mut Vec<T>, other: Vec<T>) {
    if !other.is_empty() {
        *existing = other;
    }
}

/// Fill an unset scalar with `default`.
pub fn default_option<T>(existing: &mut Option<T>, default: T) {
    if existing.is_none() {
        *existing = Some(default);
    }
}

/// Fill an empty list with `default`.
pub fn default_vec<T>(existing: &mut Vec<T>, default: Vec<T>) {
    if existing.is_empty() {
        *existing = default;
    }
}

/// Case-insensitive membership check.
#[must_use]
pub fn is_one_of(value: &str, choices: &[&str]) -> bool {
    choices.iter().any(|choice| choice.eq_ignore_ascii_case(value))
}

/// Require `value` to be one of `choices`, ignoring ASCII case.
///
/// # Errors
///
/// Returns [`GroupError::NotOneOf`] listing the accepted values.
pub fn check_one_of(field: &'static str, value: &str, choices: &[&str]) -> Result<(), GroupError> {
    if is_one_of(value, choices) {
        return Ok(());
    }
    Err(GroupError::NotOneOf {
        field,
        value: value.to_owned(),
        choices: choices.iter().map(|choice| (*choice).to_owned()).collect(),
    })
}

/// Check an address a server listens on: `host:port`, `:port` or `[v6]:port`.
///
/// The host may be empty, `localhost` or an IP literal. Port zero lets the
/// operating system pick a port and is accepted.
///
/// # Errors
///
/// Returns [`GroupError::Invalid`] when the address cannot be split into a
/// host and port or either part is malformed.
pub fn check_listening_address(field: &'static str, address: &str) -> Result<(), GroupError> {
    let (host, _) = split_host_port(field, address)?;
    if host.is_empty() || host.eq_ignore_ascii_case("localhost") || host.parse::<IpAddr>().is_ok()
    {
        return Ok(());
    }
    Err(invalid(field, address, "host must be empty, localhost or an IP address"))
}

/// Check an address to dial: any non-empty host followed by a port.
///
/// # Errors
///
/// Returns [`GroupError::Invalid`] when the host is missing or the port is
/// not a valid non-zero port number.
pub fn check_dial_address(field: &'static str, address: &str) -> Result<(), GroupError> {
    let (host, port) = split_host_port(field, address)?;
    if host.is_empty() {
        return Err(invalid(field, address, "host is missing"));
    }
    if port == 0 {
        return Err(invalid(field, address, "port cannot be 0"));
    }
    Ok(())
}

fn split_host_port<'a>(
    field: &'static str,
    address: &'a str,
) -> Result<(&'a str, u16), GroupError> {
    let Some((host, port)) = address.rsplit_once(':') else {
        return Err(invalid(field, address, "missing port"));
    };
    let port = port
        .parse::<u16>()
        .map_err(|err| invalid(field, address, &format!("port: {err}")))?;
    let host = host
        .strip_prefix('[')
        .and_then(|inner| inner.strip_suffix(']'))
        .unwrap_or(host);
    Ok((host, port))
}

/// Parse an `address/prefix` pair.
///
/// # Errors
///
/// Returns [`GroupError::Invalid`] when the address or prefix length is
/// malformed.
pub fn parse_cidr(field: &'static str, cidr: &str) -> Result<(IpAddr, u8), GroupError> {
    let Some((address, prefix)) = cidr.split_once('/') else {
        return Err(invalid(field, cidr, "missing prefix length"));
    };
    let address = address
        .parse::<IpAddr>()
        .map_err(|err| invalid(field, cidr, &err.to_string()))?;
    let max = if address.is_ipv4() { 32 } else { 128 };
    match prefix.parse::<u8>() {
        Ok(bits) if bits <= max => Ok((address, bits)),
        _ => Err(invalid(
            field,
            cidr,
            &format!("prefix length must be between 0 and {max}"),
        )),
    }
}

/// Reject port zero.
///
/// # Errors
///
/// Returns [`GroupError::PortOutOfRange`] for port `0`.
pub const fn check_port(field: &'static str, port: u16) -> Result<(), GroupError> {
    if port == 0 {
        return Err(GroupError::PortOutOfRange { field, port });
    }
    Ok(())
}

/// Accept zero (disabled) or at least `minimum`.
///
/// # Errors
///
/// Returns [`GroupError::DurationTooShort`] for a non-zero period under
/// `minimum`.
pub fn check_period(
    field: &'static str,
    value: Duration,
    minimum: Duration,
) -> Result<(), GroupError> {
    if value.is_zero() || value >= minimum {
        return Ok(());
    }
    Err(GroupError::DurationTooShort {
        field,
        value,
        minimum,
    })
}

/// Require a strictly positive duration.
///
/// # Errors
///
/// Returns [`GroupError::Invalid`] for a zero duration.
pub fn check_positive(field: &'static str, value: Duration) -> Result<(), GroupError> {
    if value.is_zero() {
        return Err(invalid(field, "0ms", "must be greater than zero"));
    }
    Ok(())
}

fn invalid(field: &'static str, value: &str, reason: &str) -> GroupError {
    GroupError::Invalid {
        field,
        value: value.to_owned(),
        reason: reason.to_owned(),
    }
}

/// Deserialise optional durations from whole milliseconds.
pub mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    /// `deserialize_with` target for `Option<Duration>` fields.
    ///
    /// # Errors
    ///
    /// Propagates the deserialiser's error when the value is not an
    /// unsigned integer or null.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<u64>::deserialize(deserializer)?.map(Duration::from_millis))
    }
}
