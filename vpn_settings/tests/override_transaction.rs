//! Atomicity of settings overrides.

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::fixtures;
use vpn_settings::compose::{LayerProvenance, fragment};
use vpn_settings::{GroupError, MemoryStorage, Settings, SettingsError};

#[fixture]
fn storage() -> MemoryStorage {
    fixtures::storage()
}

#[fixture]
fn settings() -> Settings {
    fixtures::valid_settings()
}

#[rstest]
#[case::dns(json!({"dns": {"providers": ["opendns"]}}), "dns")]
#[case::firewall(json!({"firewall": {"input_ports": [0]}}), "firewall")]
#[case::health(json!({"health": {"target_address": "cloudflare.com"}}), "health")]
#[case::updater(json!({"updater": {"min_ratio": 0.0}}), "updater")]
#[case::vpn(json!({"vpn": {"provider": {"server_selection": {"regions": ["Atlantis"]}}}}), "VPN")]
#[case::pprof(json!({"pprof": {"enabled": true, "address": "localhost"}}), "pprof")]
fn invalid_override_changes_nothing(
    mut settings: Settings,
    storage: MemoryStorage,
    #[case] patch_json: serde_json::Value,
    #[case] group: &str,
) -> Result<()> {
    let before = settings.clone();
    let patch = fragment(LayerProvenance::Cli, patch_json)?;

    let Err(err) = settings.override_with(patch, &storage, false) else {
        anyhow::bail!("override touching {group} should be rejected");
    };
    ensure!(
        matches!(err, SettingsError::OverrideRejected(_)),
        "unexpected error: {err:?}"
    );
    ensure!(err.group() == Some(group), "expected {group}, got {err}");
    ensure!(settings == before, "rejected override leaked into settings");
    settings.validate(&storage, false)?;
    Ok(())
}

#[rstest]
fn valid_fields_in_rejected_override_are_discarded(
    mut settings: Settings,
    storage: MemoryStorage,
) -> Result<()> {
    let patch = fragment(
        LayerProvenance::Cli,
        json!({
            "dns": {"caching": false},
            "log": {"level": "debug"},
            "shadowsocks": {"enabled": true}
        }),
    )?;
    let err = settings
        .override_with(patch, &storage, false)
        .expect_err("shadowsocks needs a password");
    ensure!(err.group() == Some("shadowsocks"));
    ensure!(
        err.group_error() == Some(&GroupError::Missing { field: "password" }),
        "unexpected reason: {err}"
    );
    ensure!(settings.dns.caching == Some(true));
    ensure!(settings.log.level == Some(vpn_settings::LogLevel::Info));
    Ok(())
}

#[rstest]
fn accepted_override_commits_every_group(
    mut settings: Settings,
    storage: MemoryStorage,
) -> Result<()> {
    let patch = fragment(
        LayerProvenance::Cli,
        json!({
            "dns": {"caching": false, "providers": ["quad9", "google"]},
            "firewall": {"vpn_input_ports": [51820]},
            "vpn": {
                "provider": {
                    "name": "mullvad",
                    "server_selection": {"cities": ["zurich"]}
                }
            },
            "shadowsocks": {"enabled": true, "password": "s3cret"}
        }),
    )?;
    settings.override_with(patch, &storage, false)?;

    ensure!(settings.dns.caching == Some(false));
    ensure!(settings.dns.providers == ["quad9", "google"]);
    ensure!(settings.firewall.vpn_input_ports == [51820]);
    ensure!(settings.vpn.provider.name() == "mullvad");
    ensure!(settings.vpn.provider.server_selection.cities == ["zurich"]);
    ensure!(settings.shadowsocks.enabled == Some(true));
    ensure!(settings.vpn.openvpn.user.as_deref() == Some(fixtures::USER));
    Ok(())
}

#[rstest]
fn successive_overrides_only_keep_valid_ones(
    mut settings: Settings,
    storage: MemoryStorage,
) -> Result<()> {
    let first = fragment(LayerProvenance::Cli, json!({"firewall": {"input_ports": [22]}}))?;
    let second = fragment(LayerProvenance::Cli, json!({"firewall": {"input_ports": [0]}}))?;
    let third = fragment(LayerProvenance::Cli, json!({"firewall": {"debug": true}}))?;

    settings.override_with(first, &storage, false)?;
    ensure!(settings.override_with(second, &storage, false).is_err());
    settings.override_with(third, &storage, false)?;

    ensure!(settings.firewall.input_ports == [22]);
    ensure!(settings.firewall.debug == Some(true));
    Ok(())
}

#[rstest]
fn empty_override_is_a_no_op(mut settings: Settings, storage: MemoryStorage) -> Result<()> {
    let before = settings.clone();
    settings.override_with(Settings::default(), &storage, false)?;
    ensure!(settings == before);
    Ok(())
}

#[rstest]
fn override_of_invalid_settings_can_repair_them(storage: MemoryStorage) -> Result<()> {
    let mut settings = Settings::default();
    settings.set_defaults();
    ensure!(settings.validate(&storage, false).is_err(), "no OpenVPN user yet");

    let patch = fragment(LayerProvenance::Cli, json!({"vpn": {"openvpn": {"user": "me"}}}))?;
    settings.override_with(patch, &storage, false)?;
    settings.validate(&storage, false)?;
    Ok(())
}
