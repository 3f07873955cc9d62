//! Ordered validation of every group.

use crate::group::{SettingGroup, Validate, ValidationContext};
use crate::groups::{
    ControlServer, Dns, Firewall, Health, HttpProxy, Log, Pprof, PublicIp, Shadowsocks, System,
    Updater, Version, Vpn,
};
use crate::SettingsError;

use super::Settings;

/// Number of setting groups in [`Settings`].
pub(super) const GROUP_COUNT: usize = 13;

/// Groups paired with their error labels, in check order.
pub(super) fn checks(settings: &Settings) -> [(&'static str, &dyn Validate); GROUP_COUNT] {
    [
        (ControlServer::NAME, &settings.control_server),
        (Dns::NAME, &settings.dns),
        (Firewall::NAME, &settings.firewall),
        (Health::NAME, &settings.health),
        (HttpProxy::NAME, &settings.http_proxy),
        (Log::NAME, &settings.log),
        (PublicIp::NAME, &settings.public_ip),
        (Shadowsocks::NAME, &settings.shadowsocks),
        (System::NAME, &settings.system),
        (Updater::NAME, &settings.updater),
        (Version::NAME, &settings.version),
        (Vpn::NAME, &settings.vpn),
        (Pprof::NAME, &settings.pprof),
    ]
}

pub(super) fn first_failure(
    settings: &Settings,
    ctx: &ValidationContext<'_>,
) -> Option<SettingsError> {
    checks(settings).into_iter().find_map(|(group, check)| {
        check
            .validate(ctx)
            .err()
            .map(|source| SettingsError::validation(group, source))
    })
}

pub(super) fn all_failures(settings: &Settings, ctx: &ValidationContext<'_>) -> Vec<SettingsError> {
    checks(settings)
        .into_iter()
        .filter_map(|(group, check)| {
            check
                .validate(ctx)
                .err()
                .map(|source| SettingsError::validation(group, source))
        })
        .collect()
}
