//! The root settings aggregate.
//!
//! [`Settings`] owns exactly one value of every setting group and drives them
//! through a fixed lifecycle: defaults are filled, fragments are merged in,
//! overrides are applied transactionally and the result is validated before
//! use. Warnings and the textual summary are derived on demand.
//!
//! The aggregate is a plain value with no interior locking. Callers sharing
//! it between threads wrap the whole value in a single mutex.

mod validation;
mod warnings;

use std::fmt;

use serde::Deserialize;

use crate::group::{SettingGroup, ValidationContext};
use crate::groups::{
    ControlServer, Dns, Firewall, Health, HttpProxy, Log, Pprof, PublicIp, Shadowsocks, System,
    Updater, Version, Vpn,
};
use crate::{Node, SettingsError, SettingsResult, Storage};

/// Every setting group of the program.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// HTTP control server.
    pub control_server: ControlServer,
    /// DNS over TLS forwarder.
    pub dns: Dns,
    /// Kill-switch firewall.
    pub firewall: Firewall,
    /// Health checks.
    pub health: Health,
    /// HTTP proxy.
    pub http_proxy: HttpProxy,
    /// Logging.
    pub log: Log,
    /// Public IP lookups.
    pub public_ip: PublicIp,
    /// Shadowsocks server.
    pub shadowsocks: Shadowsocks,
    /// Process identity and locale.
    pub system: System,
    /// Server list updater.
    pub updater: Updater,
    /// Release check.
    pub version: Version,
    /// VPN tunnel.
    pub vpn: Vpn,
    /// Profiling server.
    pub pprof: Pprof,
}

impl Settings {
    /// Fill every unset field with its default.
    ///
    /// Groups are defaulted in declaration order except the updater, whose
    /// provider list defaults to the VPN provider and therefore runs after
    /// the VPN group.
    pub fn set_defaults(&mut self) {
        self.control_server.set_defaults();
        self.dns.set_defaults();
        self.firewall.set_defaults();
        self.health.set_defaults();
        self.http_proxy.set_defaults();
        self.log.set_defaults();
        self.public_ip.set_defaults();
        self.shadowsocks.set_defaults();
        self.system.set_defaults();
        self.version.set_defaults();
        self.vpn.set_defaults();
        self.updater.set_defaults_for_provider(self.vpn.provider.name());
        self.pprof.set_defaults();
    }

    /// Fold `other` into `self`, keeping any value `self` already has.
    ///
    /// Merging never fails and is not validated: the result may be invalid
    /// until [`Settings::validate`] says otherwise.
    pub fn merge_with(&mut self, other: Self) {
        self.control_server.merge_with(other.control_server);
        self.dns.merge_with(other.dns);
        self.firewall.merge_with(other.firewall);
        self.health.merge_with(other.health);
        self.http_proxy.merge_with(other.http_proxy);
        self.log.merge_with(other.log);
        self.public_ip.merge_with(other.public_ip);
        self.shadowsocks.merge_with(other.shadowsocks);
        self.system.merge_with(other.system);
        self.updater.merge_with(other.updater);
        self.version.merge_with(other.version);
        self.vpn.merge_with(other.vpn);
        self.pprof.merge_with(other.pprof);
    }

    /// Apply the values set in `other` over `self`, all or nothing.
    ///
    /// The override is staged on a deep copy which is validated as a whole.
    /// Only a valid copy replaces `self`; otherwise `self` is left exactly as
    /// it was.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::OverrideRejected`] wrapping the validation
    /// failure of the staged settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpn_settings::{MemoryStorage, Settings};
    ///
    /// let mut settings = Settings::default();
    /// settings.vpn.openvpn.user = Some("user".into());
    /// settings.set_defaults();
    ///
    /// let mut patch = Settings::default();
    /// patch.firewall.input_ports = vec![0];
    ///
    /// let before = settings.clone();
    /// let err = settings
    ///     .override_with(patch, &MemoryStorage::default(), false)
    ///     .expect_err("port 0 is rejected");
    /// assert_eq!(err.group(), Some("firewall"));
    /// assert_eq!(settings, before);
    /// ```
    pub fn override_with(
        &mut self,
        other: Self,
        storage: &dyn Storage,
        ipv6_supported: bool,
    ) -> SettingsResult<()> {
        let mut staged = self.clone();
        staged.apply_overrides(other);
        if let Err(err) = staged.validate(storage, ipv6_supported) {
            tracing::warn!(
                group = err.group().unwrap_or_default(),
                error = %err,
                "settings override rejected"
            );
            return Err(SettingsError::override_rejected(err));
        }
        *self = staged;
        tracing::debug!("settings override committed");
        Ok(())
    }

    fn apply_overrides(&mut self, other: Self) {
        self.control_server.override_with(other.control_server);
        self.dns.override_with(other.dns);
        self.firewall.override_with(other.firewall);
        self.health.override_with(other.health);
        self.http_proxy.override_with(other.http_proxy);
        self.log.override_with(other.log);
        self.public_ip.override_with(other.public_ip);
        self.shadowsocks.override_with(other.shadowsocks);
        self.system.override_with(other.system);
        self.updater.override_with(other.updater);
        self.version.override_with(other.version);
        self.vpn.override_with(other.vpn);
        self.pprof.override_with(other.pprof);
    }

    /// Check every group, stopping at the first invalid one.
    ///
    /// Groups are checked in a fixed order, so the same settings always
    /// report the same failure.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Validation`] naming the first invalid group.
    pub fn validate(&self, storage: &dyn Storage, ipv6_supported: bool) -> SettingsResult<()> {
        let ctx = ValidationContext::new(storage, ipv6_supported);
        validation::first_failure(self, &ctx).map_or(Ok(()), Err)
    }

    /// Check every group and report all failures together.
    ///
    /// # Errors
    ///
    /// Returns the failing group's [`SettingsError::Validation`] when exactly
    /// one group is invalid, or a [`SettingsError::Aggregate`] listing every
    /// failure in check order.
    pub fn validation_report(
        &self,
        storage: &dyn Storage,
        ipv6_supported: bool,
    ) -> SettingsResult<()> {
        let ctx = ValidationContext::new(storage, ipv6_supported);
        SettingsError::try_aggregate(validation::all_failures(self, &ctx)).map_or(Ok(()), Err)
    }

    /// Advisories derived from combinations of settings.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        warnings::collect(self)
    }

    /// Emit every advisory as a `tracing` warning.
    pub fn log_warnings(&self) {
        for warning in self.warnings() {
            tracing::warn!("{warning}");
        }
    }

    /// Render the settings summary tree.
    #[must_use]
    pub fn to_node(&self) -> Node {
        let mut node = Node::new("Settings summary:");
        node.append(self.vpn.to_node())
            .append(self.dns.to_node())
            .append(self.firewall.to_node())
            .append(self.log.to_node())
            .append(self.health.to_node())
            .append(self.shadowsocks.to_node())
            .append(self.http_proxy.to_node())
            .append(self.control_server.to_node())
            .append(self.system.to_node())
            .append(self.public_ip.to_node())
            .append(self.updater.to_node())
            .append(self.version.to_node())
            .append(self.pprof.to_node());
        node
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_node(), f)
    }
}

#[cfg(test)]
mod tests;
