//! Unit tests for the settings aggregate.

use std::time::Duration;

use rstest::{fixture, rstest};

use super::validation::{GROUP_COUNT, checks};
use super::Settings;
use crate::constants::{openvpn, providers};
use crate::{FilterChoices, GroupError, MemoryStorage, SettingsError, VpnType};

#[fixture]
fn storage() -> MemoryStorage {
    let mut storage = MemoryStorage::default();
    storage
        .insert(
            providers::PRIVATE_INTERNET_ACCESS,
            FilterChoices {
                regions: vec!["Netherlands".into(), "CA Toronto".into()],
                ..FilterChoices::default()
            },
        )
        .insert(
            providers::MULLVAD,
            FilterChoices {
                countries: vec!["Sweden".into()],
                cities: vec!["Gothenburg".into()],
                ..FilterChoices::default()
            },
        );
    storage
}

#[fixture]
fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.vpn.openvpn.user = Some("p1234567".into());
    settings.vpn.openvpn.password = Some("secret".into());
    settings.set_defaults();
    settings
}

#[rstest]
fn defaults_are_valid(settings: Settings, storage: MemoryStorage) {
    assert!(settings.validate(&storage, false).is_ok());
    assert!(settings.validation_report(&storage, false).is_ok());
}

#[test]
fn defaults_without_credentials_fail_on_vpn() {
    let mut settings = Settings::default();
    settings.set_defaults();
    let err = settings
        .validate(&MemoryStorage::default(), false)
        .expect_err("OpenVPN user is required");
    assert_eq!(err.group(), Some("VPN"));
    assert_eq!(err.to_string(), "VPN settings: OpenVPN user is required");
}

#[test]
fn updater_providers_default_to_vpn_provider() {
    let mut settings = Settings::default();
    settings.vpn.provider.name = Some(providers::MULLVAD.into());
    settings.set_defaults();
    assert_eq!(settings.updater.providers, [providers::MULLVAD]);
}

#[rstest]
#[case::canonical(providers::CUSTOM)]
#[case::capitalised("Custom")]
#[case::upper("CUSTOM")]
fn updater_providers_stay_empty_for_custom_provider(#[case] name: &str) {
    let mut settings = Settings::default();
    settings.vpn.provider.name = Some(name.into());
    settings.set_defaults();
    assert!(settings.updater.providers.is_empty());
}

#[test]
fn updater_defaults_follow_the_defaulted_vpn_provider() {
    let mut settings = Settings::default();
    settings.set_defaults();
    assert_eq!(
        settings.updater.providers,
        [providers::PRIVATE_INTERNET_ACCESS]
    );
}

#[test]
fn set_defaults_keeps_existing_values() {
    let mut settings = Settings::default();
    settings.dns.caching = Some(false);
    settings.firewall.input_ports = vec![8080];
    settings.set_defaults();
    assert_eq!(settings.dns.caching, Some(false));
    assert_eq!(settings.firewall.input_ports, [8080]);
    assert_eq!(settings.dns.ipv6, Some(false));
}

#[rstest]
fn groups_are_checked_in_fixed_order(settings: Settings) {
    let names: Vec<&str> = checks(&settings).iter().map(|(name, _)| *name).collect();
    assert_eq!(names.len(), GROUP_COUNT);
    assert_eq!(
        names,
        [
            "control server",
            "dns",
            "firewall",
            "health",
            "http proxy",
            "log",
            "public ip check",
            "shadowsocks",
            "system",
            "updater",
            "version",
            "VPN",
            "pprof",
        ]
    );
}

#[rstest]
#[case::control_server(
    |s: &mut Settings| s.control_server.address = Some("nowhere".into()),
    "control server"
)]
#[case::dns(|s: &mut Settings| s.dns.providers = vec!["opendns".into()], "dns")]
#[case::firewall(|s: &mut Settings| s.firewall.input_ports = vec![0], "firewall")]
#[case::health(|s: &mut Settings| s.health.target_address = Some(":443".into()), "health")]
#[case::http_proxy(
    |s: &mut Settings| s.http_proxy.listening_address = Some("8888".into()),
    "http proxy"
)]
#[case::public_ip(
    |s: &mut Settings| s.public_ip.api = Some("whatismyip".into()),
    "public ip check"
)]
#[case::shadowsocks(|s: &mut Settings| s.shadowsocks.enabled = Some(true), "shadowsocks")]
#[case::system(|s: &mut Settings| s.system.timezone = Some("Europe/ Paris".into()), "system")]
#[case::updater(|s: &mut Settings| s.updater.min_ratio = Some(1.5), "updater")]
#[case::vpn(|s: &mut Settings| s.vpn.openvpn.version = Some("2.3".into()), "VPN")]
#[case::pprof(|s: &mut Settings| {
    s.pprof.enabled = Some(true);
    s.pprof.address = Some("example.com:6060".into());
}, "pprof")]
fn single_invalid_group_is_named(
    mut settings: Settings,
    storage: MemoryStorage,
    #[case] break_group: fn(&mut Settings),
    #[case] group: &str,
) {
    break_group(&mut settings);
    let err = settings
        .validate(&storage, false)
        .expect_err("broken group should fail validation");
    assert_eq!(err.group(), Some(group));
    assert!(
        err.to_string().starts_with(&format!("{group} settings: ")),
        "{err}"
    );
}

#[rstest]
fn first_invalid_group_in_order_wins(mut settings: Settings, storage: MemoryStorage) {
    settings.updater.period = Some(Duration::from_secs(1));
    settings.dns.update_period = Some(Duration::from_secs(1));
    settings.firewall.outbound_subnets = vec!["10.0.0.0".into()];

    let err = settings
        .validate(&storage, false)
        .expect_err("three groups are invalid");
    assert_eq!(err.group(), Some("dns"));

    match settings.validation_report(&storage, false) {
        Err(SettingsError::Aggregate(aggregate)) => {
            assert_eq!(aggregate.groups(), ["dns", "firewall", "updater"]);
        }
        other => panic!("expected aggregate report, got {other:?}"),
    }
}

#[rstest]
fn validation_report_returns_lone_failure_unwrapped(
    mut settings: Settings,
    storage: MemoryStorage,
) {
    settings.firewall.vpn_input_ports = vec![0];
    let err = settings
        .validation_report(&storage, false)
        .expect_err("firewall is invalid");
    assert!(matches!(err, SettingsError::Validation { group: "firewall", .. }));
}

#[rstest]
fn server_filters_are_checked_against_storage(mut settings: Settings, storage: MemoryStorage) {
    settings.vpn.provider.server_selection.regions = vec!["netherlands".into()];
    assert!(settings.validate(&storage, false).is_ok());

    settings.vpn.provider.server_selection.regions = vec!["Atlantis".into()];
    let err = settings
        .validate(&storage, false)
        .expect_err("Atlantis is not a region");
    assert_eq!(
        err.group_error(),
        Some(&GroupError::FilterUnavailable {
            filter: "region",
            value: "Atlantis".into(),
            provider: providers::PRIVATE_INTERNET_ACCESS.into(),
        })
    );
}

#[rstest]
fn custom_provider_skips_filter_lookup(mut settings: Settings) {
    settings.vpn.provider.name = Some(providers::CUSTOM.into());
    settings.vpn.provider.server_selection.countries = vec!["Anywhere".into()];
    assert!(settings.validate(&MemoryStorage::default(), false).is_ok());
}

fn wireguard_patch(address: &str) -> Settings {
    let mut patch = Settings::default();
    patch.vpn.vpn_type = Some(VpnType::Wireguard);
    patch.vpn.provider.name = Some(providers::MULLVAD.into());
    patch.vpn.wireguard.private_key = Some("wOEI9rqqbDwnN8/Bpp22sVz48T71vJ4fYmFWujulwUU=".into());
    patch.vpn.wireguard.addresses = vec![address.into()];
    patch
}

#[rstest]
fn ipv6_interface_addresses_need_host_support(settings: Settings, storage: MemoryStorage) {
    let mut without_ipv6 = settings.clone();
    let err = without_ipv6
        .override_with(wireguard_patch("fd00::2/128"), &storage, false)
        .expect_err("IPv6 is not supported");
    assert_eq!(err.group(), Some("VPN"));
    assert!(matches!(
        err.group_error(),
        Some(GroupError::Ipv6NotSupported { .. })
    ));
    assert_eq!(without_ipv6, settings);

    let mut with_ipv6 = settings;
    with_ipv6
        .override_with(wireguard_patch("fd00::2/128"), &storage, true)
        .expect("IPv6 is supported");
    assert_eq!(with_ipv6.vpn.vpn_type, Some(VpnType::Wireguard));
    assert_eq!(with_ipv6.vpn.wireguard.addresses, ["fd00::2/128"]);
}

#[rstest]
fn wireguard_requires_supporting_provider(settings: Settings, storage: MemoryStorage) {
    let mut patch = wireguard_patch("10.64.0.2/32");
    patch.vpn.provider.name = Some(providers::CYBERGHOST.into());
    let mut target = settings.clone();
    let err = target
        .override_with(patch, &storage, false)
        .expect_err("Cyberghost has no WireGuard servers");
    assert!(matches!(
        err.group_error(),
        Some(GroupError::Invalid {
            field: "provider name",
            ..
        })
    ));
    assert_eq!(target, settings);
}

#[rstest]
fn rejected_override_leaves_settings_untouched(mut settings: Settings, storage: MemoryStorage) {
    let before = settings.clone();
    let mut patch = Settings::default();
    patch.dns.caching = Some(false);
    patch.log.level = Some(crate::LogLevel::Debug);
    patch.firewall.input_ports = vec![0];

    let err = settings
        .override_with(patch, &storage, false)
        .expect_err("port 0 is out of range");
    assert!(matches!(err, SettingsError::OverrideRejected(_)));
    assert_eq!(err.group(), Some("firewall"));
    assert_eq!(settings, before);
    assert!(settings.validate(&storage, false).is_ok());
}

#[rstest]
fn accepted_override_prefers_incoming_values(mut settings: Settings, storage: MemoryStorage) {
    let mut patch = Settings::default();
    patch.dns.caching = Some(false);
    patch.firewall.input_ports = vec![8080, 8443];
    patch.vpn.openvpn.version = Some(openvpn::V2_4.into());

    settings
        .override_with(patch, &storage, false)
        .expect("override is valid");
    assert_eq!(settings.dns.caching, Some(false));
    assert_eq!(settings.firewall.input_ports, [8080, 8443]);
    assert_eq!(settings.vpn.openvpn.version.as_deref(), Some(openvpn::V2_4));
    assert_eq!(settings.vpn.openvpn.user.as_deref(), Some("p1234567"));
    assert_eq!(settings.dns.providers, ["cloudflare"]);
    assert!(settings.validate(&storage, false).is_ok());
}

#[rstest]
fn merge_keeps_existing_and_fills_unset(mut settings: Settings) {
    settings.firewall.outbound_subnets.clear();
    let mut fragment = Settings::default();
    fragment.dns.caching = Some(false);
    fragment.vpn.openvpn.user = Some("other".into());
    fragment.firewall.outbound_subnets = vec!["192.168.1.0/24".into()];

    settings.merge_with(fragment);
    assert_eq!(settings.dns.caching, Some(true));
    assert_eq!(settings.vpn.openvpn.user.as_deref(), Some("p1234567"));
    assert_eq!(settings.firewall.outbound_subnets, ["192.168.1.0/24"]);
}

#[rstest]
fn merge_is_not_validated(mut settings: Settings, storage: MemoryStorage) {
    let mut fragment = Settings::default();
    fragment.firewall.input_ports = vec![0];
    settings.merge_with(fragment);
    assert_eq!(settings.firewall.input_ports, [0]);
    assert!(settings.validate(&storage, false).is_err());
}

#[rstest]
fn clones_share_no_state(settings: Settings) {
    let mut copy = settings.clone();
    copy.firewall.input_ports.push(22);
    copy.vpn.provider.server_selection.countries.push("Sweden".into());
    assert!(settings.firewall.input_ports.is_empty());
    assert!(settings.vpn.provider.server_selection.countries.is_empty());

    let mut original = settings;
    let snapshot = original.clone();
    original.dns.providers.push("google".into());
    assert_eq!(snapshot.dns.providers, ["cloudflare"]);
}

#[rstest]
fn default_settings_raise_no_warnings(settings: Settings) {
    assert!(settings.warnings().is_empty());
}

#[rstest]
fn hidemyass_is_flagged(mut settings: Settings) {
    settings.vpn.provider.name = Some(providers::HIDEMYASS.into());
    let warnings = settings.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("HideMyAss dropped support"));
}

#[rstest]
#[case(providers::PRIVATE_INTERNET_ACCESS)]
#[case(providers::MULLVAD)]
fn openvpn_2_4_removal_is_announced_for_any_provider(
    mut settings: Settings,
    #[case] provider: &str,
) {
    settings.vpn.provider.name = Some(provider.into());
    settings.vpn.openvpn.version = Some(openvpn::V2_4.into());
    let warnings = settings.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("will be removed"));
}

#[rstest]
fn deprecated_provider_and_version_both_warn(mut settings: Settings) {
    settings.vpn.provider.name = Some(providers::HIDEMYASS.into());
    settings.vpn.openvpn.version = Some(openvpn::V2_4.into());
    let warnings = settings.warnings();
    assert_eq!(warnings.len(), 2);
    assert!(warnings[0].starts_with("HideMyAss"));
    assert!(warnings[1].contains("will be removed"));
    assert_eq!(warnings, settings.warnings());
}

#[rstest]
#[case(openvpn::V2_4, "OpenVPN 2.4 uses OpenSSL 1.1.1", 2)]
#[case(openvpn::V2_5, "OpenVPN 2.5 uses OpenSSL 3", 1)]
fn weak_security_provider_warns_per_version(
    mut settings: Settings,
    #[case] version: &str,
    #[case] prefix: &str,
    #[case] count: usize,
) {
    settings.vpn.provider.name = Some(providers::SLICKVPN.into());
    settings.vpn.openvpn.version = Some(version.into());
    let warnings = settings.warnings();
    assert_eq!(warnings.len(), count);
    assert!(warnings[0].starts_with(prefix), "{}", warnings[0]);
    assert!(warnings[0].contains("slickvpn"));
}

#[rstest]
fn weak_security_warning_needs_openvpn(mut settings: Settings) {
    settings.vpn.provider.name = Some(providers::SLICKVPN.into());
    settings.vpn.vpn_type = Some(VpnType::Wireguard);
    assert!(settings.warnings().is_empty());
}

#[rstest]
fn summary_lists_groups_in_display_order(settings: Settings) {
    let node = settings.to_node();
    assert_eq!(node.label(), "Settings summary:");
    let labels: Vec<&str> = node.children().iter().map(crate::Node::label).collect();
    assert_eq!(
        labels,
        [
            "VPN settings:",
            "DNS settings:",
            "Firewall settings:",
            "Log settings:",
            "Health settings:",
            "Shadowsocks server settings:",
            "HTTP proxy settings:",
            "Control server settings:",
            "System settings:",
            "Public IP settings:",
            "Server data updater settings:",
            "Version settings:",
            "Pprof settings:",
        ]
    );
    let text = settings.to_string();
    assert!(text.starts_with("Settings summary:\n├── VPN settings:"));
    assert!(text.contains("User: [set]"));
    assert!(!text.contains("p1234567"));
    assert!(!text.contains("secret"));
}
