//! Criterion benchmarks for govlens-analysis.
//!
//! - Inversion over 100 / 1K contracts
//! - Reverse lookup on a 1K contract graph
//! - OP stack template rendering

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use govlens_analysis::inversion::invert;
use govlens_analysis::template::opstack::PERMISSION_TEMPLATES;
use govlens_analysis::template::TemplateRenderer;
use govlens_core::snapshot::{ContractRecord, Snapshot};
use govlens_core::types::upgradeability::AdminProxy;
use govlens_core::types::{Address, Upgradeability, Value};

fn address(n: u32) -> Address {
    let mut bytes = [0u8; 20];
    bytes[16..].copy_from_slice(&n.to_be_bytes());
    Address::from_bytes(bytes)
}

/// `n` proxies sharing one admin, each owned by a rotating set of EOAs.
fn synthetic_snapshot(n: u32) -> Snapshot {
    let admin = address(0);
    let eoas: Vec<Address> = (0..16).map(|i| address(1_000_000 + i)).collect();
    let contracts = (1..=n)
        .map(|i| {
            ContractRecord::new(
                format!("Contract{i}"),
                address(i),
                Upgradeability::Eip1967Proxy(AdminProxy {
                    admin,
                    implementation: address(500_000 + i),
                }),
            )
            .with_value("owner", eoas[(i % 16) as usize])
            .with_value(
                "signers",
                Value::Array(eoas.iter().take(4).copied().map(Value::Address).collect()),
            )
            .with_value("next", address(i % n + 1))
        })
        .chain(std::iter::once(ContractRecord::new(
            "ProxyAdmin",
            admin,
            Upgradeability::Immutable,
        )))
        .collect();
    Snapshot::new("bench", contracts, eoas)
}

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");
    for n in [100u32, 1_000] {
        let snapshot = synthetic_snapshot(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &snapshot, |b, snapshot| {
            b.iter(|| invert(black_box(snapshot)))
        });
    }
    group.finish();
}

fn bench_reverse_lookup(c: &mut Criterion) {
    let graph = invert(&synthetic_snapshot(1_000));
    c.bench_function("reverse_lookup_1k", |b| {
        b.iter(|| graph.reverse(black_box("owner"), black_box("Contract500")))
    });
}

fn bench_render(c: &mut Criterion) {
    let graph = invert(&synthetic_snapshot(1_000));
    let renderer = TemplateRenderer::new(&graph);
    c.bench_function("render_proxy_admin_1k", |b| {
        b.iter(|| renderer.render(black_box(&PERMISSION_TEMPLATES[0]), address(0)))
    });
}

criterion_group!(benches, bench_invert, bench_reverse_lookup, bench_render);
criterion_main!(benches);
