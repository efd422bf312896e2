//! Shared helpers for analysis integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use govlens_analysis::ProjectDiscovery;
use govlens_core::source::{FsSnapshotSource, SnapshotSource};
use govlens_core::types::Address;

pub const PROXY_ADMIN: &str = "0xdaeeb975729fae923d5a4fd12aabfe228f219e9c";
pub const COUNCIL: &str = "0x2ea68ef786e4d3cea27d26934b484e73cf575dca";
pub const OPTIMISM_PORTAL: &str = "0xdba41ecccc3fc1626e53a13043b026c48bbf33fe";
pub const L1_STANDARD_BRIDGE: &str = "0x4d6608697a8d41bed440e50454f31af3176813e0";
pub const PROPOSER: &str = "0xb860dcd6c8a1f8b46287cced9041dff02cee7374";
pub const BATCHER: &str = "0x43e210471948d33296c87009e8a7f770d9106fd2";

pub fn fixture_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/discovery")
}

pub fn opstack() -> ProjectDiscovery {
    let source = FsSnapshotSource::new(fixture_root(), "ethereum");
    ProjectDiscovery::new(source.load("opstack").unwrap())
}

pub fn address(s: &str) -> Address {
    s.parse().unwrap()
}

pub fn addr(n: u8) -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = n;
    Address::from_bytes(bytes)
}
