//! Advisories derived from combinations of otherwise valid settings.
//!
//! Rules are evaluated in a fixed order and every matching rule contributes
//! one message.

use crate::constants::{openvpn, providers};
use crate::group::helpers::is_one_of;
use crate::groups::VpnType;

use super::Settings;

/// Providers whose servers still rely on weak TLS security.
const WEAK_SECURITY_PROVIDERS: &[&str] = &[providers::SLICKVPN];

pub(super) fn collect(settings: &Settings) -> Vec<String> {
    let mut warnings = Vec::new();
    let provider = settings.vpn.provider.name();
    let openvpn_version = settings.vpn.openvpn.version.as_deref();

    if provider.eq_ignore_ascii_case(providers::HIDEMYASS) {
        warnings.push(String::from(
            "HideMyAss dropped support for Linux OpenVPN so this will likely not work anymore.",
        ));
    }

    if is_one_of(provider, WEAK_SECURITY_PROVIDERS)
        && settings.vpn.vpn_type == Some(VpnType::OpenVpn)
    {
        if openvpn_version == Some(openvpn::V2_4) {
            warnings.push(format!(
                "OpenVPN 2.4 uses OpenSSL 1.1.1 which allows the usage of weak security in \
                 today's standards. This can be ok if good security is enforced by the VPN \
                 provider. However, {provider} uses weak security so you should use OpenVPN 2.5 \
                 to enforce good security practices."
            ));
        } else {
            warnings.push(format!(
                "OpenVPN 2.5 uses OpenSSL 3 which prohibits the usage of weak security in \
                 today's standards. {provider} uses weak security which is out of this \
                 program's control so the only workaround is to allow such weaknesses using \
                 the OpenVPN option tls-cipher \"DEFAULT:@SECLEVEL=0\". You might want to reach \
                 to your provider so they upgrade their certificates. Once this is done, let \
                 the maintainers know by creating an issue with the new certificate so it can \
                 be updated."
            ));
        }
    }

    if openvpn_version == Some(openvpn::V2_4) {
        warnings.push(String::from(
            "OpenVPN 2.4 will be removed in a future release. \
             Please create an issue if you have a compelling reason to keep it.",
        ));
    }

    warnings
}
