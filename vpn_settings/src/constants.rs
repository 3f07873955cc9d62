//! Well-known identifiers referenced by validation, defaults and warnings.

/// VPN provider names.
pub mod providers {
    /// AirVPN.
    pub const AIRVPN: &str = "airvpn";
    /// User-supplied server configuration.
    pub const CUSTOM: &str = "custom";
    /// Cyberghost.
    pub const CYBERGHOST: &str = "cyberghost";
    /// ExpressVPN.
    pub const EXPRESSVPN: &str = "expressvpn";
    /// FastestVPN.
    pub const FASTESTVPN: &str = "fastestvpn";
    /// Giganews.
    pub const GIGANEWS: &str = "giganews";
    /// HideMyAss.
    pub const HIDEMYASS: &str = "hidemyass";
    /// IPVanish.
    pub const IPVANISH: &str = "ipvanish";
    /// IVPN.
    pub const IVPN: &str = "ivpn";
    /// Mullvad.
    pub const MULLVAD: &str = "mullvad";
    /// NordVPN.
    pub const NORDVPN: &str = "nordvpn";
    /// Perfect Privacy.
    pub const PERFECT_PRIVACY: &str = "perfect privacy";
    /// Privado.
    pub const PRIVADO: &str = "privado";
    /// Private Internet Access.
    pub const PRIVATE_INTERNET_ACCESS: &str = "private internet access";
    /// PrivateVPN.
    pub const PRIVATEVPN: &str = "privatevpn";
    /// ProtonVPN.
    pub const PROTONVPN: &str = "protonvpn";
    /// PureVPN.
    pub const PUREVPN: &str = "purevpn";
    /// SlickVPN.
    pub const SLICKVPN: &str = "slickvpn";
    /// Surfshark.
    pub const SURFSHARK: &str = "surfshark";
    /// TorGuard.
    pub const TORGUARD: &str = "torguard";
    /// VPN Secure.
    pub const VPNSECURE: &str = "vpnsecure";
    /// VPN Unlimited.
    pub const VPN_UNLIMITED: &str = "vpn unlimited";
    /// VyprVPN.
    pub const VYPRVPN: &str = "vyprvpn";
    /// Windscribe.
    pub const WINDSCRIBE: &str = "windscribe";

    /// Every supported provider, custom included.
    pub const ALL: &[&str] = &[
        AIRVPN,
        CUSTOM,
        CYBERGHOST,
        EXPRESSVPN,
        FASTESTVPN,
        GIGANEWS,
        HIDEMYASS,
        IPVANISH,
        IVPN,
        MULLVAD,
        NORDVPN,
        PERFECT_PRIVACY,
        PRIVADO,
        PRIVATE_INTERNET_ACCESS,
        PRIVATEVPN,
        PROTONVPN,
        PUREVPN,
        SLICKVPN,
        SURFSHARK,
        TORGUARD,
        VPNSECURE,
        VPN_UNLIMITED,
        VYPRVPN,
        WINDSCRIBE,
    ];

    /// Providers whose servers accept WireGuard connections.
    pub const WIREGUARD: &[&str] = &[
        AIRVPN, CUSTOM, IVPN, MULLVAD, NORDVPN, PROTONVPN, SURFSHARK, WINDSCRIBE,
    ];
}

/// OpenVPN client versions.
pub mod openvpn {
    /// OpenVPN 2.4, linked against OpenSSL 1.1.1.
    pub const V2_4: &str = "2.4";
    /// OpenVPN 2.5, linked against OpenSSL 3.
    pub const V2_5: &str = "2.5";

    /// Supported client versions.
    pub const VERSIONS: &[&str] = &[V2_4, V2_5];

    /// Transport protocols OpenVPN may use.
    pub const PROTOCOLS: &[&str] = &["udp", "tcp"];
}

/// Upstream DNS over TLS providers.
pub const DNS_PROVIDERS: &[&str] = &[
    "cira family",
    "cira private",
    "cira protected",
    "cleanbrowsing adult",
    "cleanbrowsing family",
    "cleanbrowsing security",
    "cloudflare",
    "cloudflare family",
    "cloudflare security",
    "google",
    "libredns",
    "quad9",
    "quad9 secured",
    "quad9 unsecured",
    "quadrant",
];

/// Public IP lookup services.
pub const PUBLIC_IP_APIS: &[&str] = &["ipinfo", "ip2location", "cloudflare"];

/// Shadowsocks AEAD ciphers.
pub const SHADOWSOCKS_CIPHERS: &[&str] = &[
    "chacha20-ietf-poly1305",
    "aes-128-gcm",
    "aes-256-gcm",
];
