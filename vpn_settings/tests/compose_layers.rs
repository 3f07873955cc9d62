//! Composition of settings fragments gathered from several sources.

use anyhow::{Result, ensure};
use camino::{Utf8Path, Utf8PathBuf};
use rstest::rstest;
use serde_json::json;
use test_helpers::fixtures;
use vpn_settings::compose::{LayerProvenance, SettingsComposer, SettingsLayer};
use vpn_settings::{Settings, SettingsError};

#[rstest]
fn higher_precedence_sources_win_regardless_of_push_order() -> Result<()> {
    let mut composer = SettingsComposer::new();
    composer.push_value(LayerProvenance::Cli, json!({"firewall": {"input_ports": [4040]}}))?;
    composer.push_value(
        LayerProvenance::Environment,
        json!({"firewall": {"input_ports": [3030], "debug": true}}),
    )?;
    composer.push_file(
        fixtures::file_fragment(
            r#"{"firewall": {"input_ports": [2020], "outbound_subnets": ["10.0.0.0/8"]}}"#,
        )?,
        Some(Utf8PathBuf::from("/etc/vpn/config.json")),
    );

    let settings = composer.compose();
    ensure!(settings.firewall.input_ports == [4040], "CLI should win");
    ensure!(settings.firewall.debug == Some(true), "environment fills gaps");
    ensure!(settings.firewall.outbound_subnets == ["10.0.0.0/8"], "file fills gaps");
    ensure!(settings.firewall.enabled == Some(true), "defaults fill the rest");
    Ok(())
}

#[rstest]
fn later_layers_of_the_same_source_win() -> Result<()> {
    let mut composer = SettingsComposer::with_capacity(2);
    composer.push_value(LayerProvenance::File, json!({"log": {"level": "warn"}}))?;
    composer.push_value(LayerProvenance::File, json!({"log": {"level": "debug"}}))?;
    let settings = composer.compose();
    ensure!(settings.log.level == Some(vpn_settings::LogLevel::Debug));
    Ok(())
}

#[rstest]
fn secrets_rank_between_file_and_environment() -> Result<()> {
    let mut composer = SettingsComposer::new();
    composer.push_value(
        LayerProvenance::Environment,
        json!({"vpn": {"openvpn": {"user": "env-user"}}}),
    )?;
    composer.push_value(
        LayerProvenance::Secrets,
        json!({"vpn": {"openvpn": {"user": "secret-user", "password": "secret-pass"}}}),
    )?;
    composer.push_value(
        LayerProvenance::File,
        json!({"vpn": {"openvpn": {"password": "file-pass"}}}),
    )?;

    let settings = composer.compose();
    ensure!(settings.vpn.openvpn.user.as_deref() == Some("env-user"));
    ensure!(settings.vpn.openvpn.password.as_deref() == Some("secret-pass"));
    settings.validate(&fixtures::storage(), false)?;
    Ok(())
}

#[rstest]
fn composition_runs_defaults_after_merging() -> Result<()> {
    let mut composer = SettingsComposer::new();
    composer.push_value(
        LayerProvenance::Environment,
        json!({"vpn": {"provider": {"name": "mullvad"}}}),
    )?;
    let settings = composer.compose();
    ensure!(settings.vpn.provider.name() == "mullvad");
    ensure!(
        settings.updater.providers == ["mullvad"],
        "updater providers should follow the merged VPN provider"
    );
    Ok(())
}

#[rstest]
fn empty_composer_yields_defaults() {
    let composed = SettingsComposer::new().compose();
    let mut defaults = Settings::default();
    defaults.set_defaults();
    assert_eq!(composed, defaults);
}

#[rstest]
fn layers_keep_provenance_and_path() {
    let mut composer = SettingsComposer::new();
    composer.push_file(Settings::default(), Some(Utf8PathBuf::from("settings.json")));
    composer.push_secrets(Settings::default());
    composer.push_environment(Settings::default());
    composer.push_cli(Settings::default());
    composer.push_layer(SettingsLayer::new(LayerProvenance::Cli, Settings::default()));

    let provenances: Vec<LayerProvenance> = composer
        .layers()
        .iter()
        .map(SettingsLayer::provenance)
        .collect();
    assert_eq!(
        provenances,
        [
            LayerProvenance::File,
            LayerProvenance::Secrets,
            LayerProvenance::Environment,
            LayerProvenance::Cli,
            LayerProvenance::Cli,
        ]
    );
    let path = composer.layers().first().and_then(SettingsLayer::path);
    assert_eq!(path, Some(Utf8Path::new("settings.json")));
}

#[rstest]
fn composer_keeps_layers_until_composed() -> Result<()> {
    let mut composer = SettingsComposer::new();
    composer.push_file(
        fixtures::file_fragment(r#"{"dns": {"caching": false}}"#)?,
        Some(Utf8PathBuf::from("/etc/vpn/config.json")),
    );
    composer.push_value(LayerProvenance::Cli, json!({"dns": {"caching": true}}))?;
    ensure!(composer.layers().len() == 2);
    ensure!(
        composer.layers().first().and_then(SettingsLayer::path)
            == Some(Utf8Path::new("/etc/vpn/config.json"))
    );
    ensure!(composer.compose().dns.caching == Some(true));
    Ok(())
}

#[rstest]
#[case::unknown_group(json!({"dnss": {}}))]
#[case::unknown_field(json!({"dns": {"cache": true}}))]
#[case::wrong_type(json!({"firewall": {"input_ports": ["http"]}}))]
#[case::negative_duration(json!({"updater": {"period": -1}}))]
fn malformed_fragments_report_their_source(#[case] value: serde_json::Value) {
    let mut composer = SettingsComposer::new();
    let err = composer
        .push_value(LayerProvenance::Environment, value)
        .expect_err("fragment should be rejected");
    assert!(matches!(
        err,
        SettingsError::Fragment {
            provenance: LayerProvenance::Environment,
            ..
        }
    ));
    assert!(err.to_string().starts_with("invalid environment settings fragment"));
    assert!(composer.layers().is_empty());
}
