//! Concrete setting groups owned by [`crate::Settings`].

mod control_server;
mod dns;
mod firewall;
mod health;
mod http_proxy;
mod log;
mod pprof;
mod public_ip;
mod shadowsocks;
mod system;
mod updater;
mod version;
mod vpn;

pub use control_server::ControlServer;
pub use dns::{Blacklist, Dns};
pub use firewall::Firewall;
pub use health::{Health, HealthyWait};
pub use http_proxy::HttpProxy;
pub use log::{Log, LogLevel};
pub use pprof::Pprof;
pub use public_ip::PublicIp;
pub use shadowsocks::Shadowsocks;
pub use system::System;
pub use updater::Updater;
pub use version::Version;
pub use vpn::{OpenVpn, Provider, ServerSelection, Vpn, VpnType, Wireguard};
