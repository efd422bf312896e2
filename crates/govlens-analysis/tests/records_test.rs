//! Tests for descriptive record builders.

mod common;

use common::{addr, address, opstack, COUNCIL, L1_STANDARD_BRIDGE, OPTIMISM_PORTAL};
use govlens_analysis::records::{ContractDetailsOptions, EscrowOptions, Pausable, Reference, Tokens};
use govlens_analysis::{AccountKind, ProjectDiscovery};
use govlens_core::errors::{AnalysisError, GovlensErrorCode, RecordError, ValueError};
use govlens_core::snapshot::{ContractRecord, Snapshot};
use govlens_core::types::upgradeability::StarkWareProxy;
use govlens_core::types::{Upgradeability, Value};

/// T4-REC-01: Pause sentences follow the base description.
#[test]
fn test_contract_details_pausable_composition() {
    let discovery = opstack();
    let options = ContractDetailsOptions {
        description: Some("Entry point for deposits.".into()),
        pausable: Some(Pausable {
            pausable_by: vec!["SecurityCouncilMultisig".into()],
            paused: true,
        }),
        ..Default::default()
    };
    let details = discovery.contract_details("OptimismPortal", options).unwrap();
    assert_eq!(details.address, address(OPTIMISM_PORTAL));
    assert_eq!(
        details.description.as_deref(),
        Some(
            "Entry point for deposits. The contract is pausable by SecurityCouncilMultisig. \
             The contract is currently paused."
        )
    );
}

/// T4-REC-02: Without a base description only the pause sentence remains.
#[test]
fn test_contract_details_pausable_without_description() {
    let discovery = opstack();
    let options = ContractDetailsOptions {
        pausable: Some(Pausable {
            pausable_by: vec!["A".into(), "B".into()],
            paused: false,
        }),
        ..Default::default()
    };
    let details = discovery.contract_details("OptimismPortal", options).unwrap();
    assert_eq!(
        details.description.as_deref(),
        Some("The contract is pausable by A, B.")
    );
}

/// T4-REC-03: An escrow without a usable timestamp is refused.
#[test]
fn test_escrow_without_timestamp_fails() {
    let discovery = opstack();
    let options = EscrowOptions::new(address(OPTIMISM_PORTAL), Tokens::List(vec!["ETH".into()]));
    match discovery.escrow_details(options) {
        Err(AnalysisError::Record(err @ RecordError::MissingTimestamp { .. })) => {
            assert_eq!(err.error_code(), "MISSING_TIMESTAMP");
        }
        other => panic!("expected MissingTimestamp, got {other:?}"),
    }

    // A zero timestamp is as good as none, whether discovered or overridden.
    let undated = ContractRecord::new("Undated", addr(1), Upgradeability::Immutable)
        .with_since_timestamp(0);
    let dated = ContractRecord::new("Dated", addr(2), Upgradeability::Immutable)
        .with_since_timestamp(1_686_068_903);
    let discovery = ProjectDiscovery::new(Snapshot::new("zero", vec![undated, dated], []));
    assert!(matches!(
        discovery.escrow_details(EscrowOptions::new(addr(1), Tokens::All)),
        Err(AnalysisError::Record(RecordError::MissingTimestamp { .. }))
    ));
    let mut options = EscrowOptions::new(addr(2), Tokens::All);
    options.since_timestamp = Some(0);
    assert!(matches!(
        discovery.escrow_details(options),
        Err(AnalysisError::Record(RecordError::MissingTimestamp { .. }))
    ));
}

/// T4-REC-04: Discovered and overridden timestamps both satisfy an escrow.
#[test]
fn test_escrow_timestamps() {
    let discovery = opstack();
    let bridge = discovery
        .escrow_details(EscrowOptions::new(address(L1_STANDARD_BRIDGE), Tokens::All))
        .unwrap();
    assert!(bridge.new_version);
    assert_eq!(bridge.since_timestamp, 1_686_068_903);
    assert_eq!(bridge.contract.name, "L1StandardBridge");

    let mut options = EscrowOptions::new(address(OPTIMISM_PORTAL), Tokens::All);
    options.since_timestamp = Some(1_700_000_000);
    options.name = Some("Portal".into());
    let portal = discovery.escrow_details(options).unwrap();
    assert_eq!(portal.since_timestamp, 1_700_000_000);
    assert_eq!(portal.contract.name, "Portal");

    let json = serde_json::to_value(&portal).unwrap();
    assert_eq!(json["tokens"], "*");
    assert_eq!(json["newVersion"], true);
}

/// T4-REC-05: A multisig yields the safe record and its participants.
#[test]
fn test_multisig_permission_shape() {
    let discovery = opstack();
    assert_eq!(discovery.multisig_stats("SecurityCouncilMultisig").unwrap(), "2 / 3");

    let references = vec![Reference::new("Safe", "https://example.org/safe")];
    let records = discovery
        .multisig_permission("SecurityCouncilMultisig", "Controls upgrades.", Some(references))
        .unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].name, "SecurityCouncilMultisig");
    assert_eq!(
        records[0].description,
        "Controls upgrades. This is a Gnosis Safe with 2 / 3 threshold."
    );
    assert_eq!(records[0].accounts.len(), 1);
    assert_eq!(records[0].accounts[0].address, address(COUNCIL));
    assert_eq!(records[0].accounts[0].kind, AccountKind::MultiSig);
    assert!(records[0].references.is_none());

    assert_eq!(records[1].name, "SecurityCouncilMultisig participants");
    assert_eq!(
        records[1].description,
        "Those are the participants of the SecurityCouncilMultisig."
    );
    assert_eq!(records[1].accounts.len(), 3);
    assert!(records[1].accounts.iter().all(|a| a.kind == AccountKind::Eoa));
    assert_eq!(records[1].references.as_ref().map(Vec::len), Some(1));
}

/// T4-REC-06: Only a Gnosis Safe can be described as a multisig.
#[test]
fn test_multisig_permission_rejects_other_kinds() {
    let discovery = opstack();
    match discovery.multisig_permission("ProxyAdmin", "Admin.", None) {
        Err(AnalysisError::Record(RecordError::NotMultisig { contract, kind, .. })) => {
            assert_eq!(contract, "ProxyAdmin");
            assert_eq!(kind, "immutable");
        }
        other => panic!("expected NotMultisig, got {other:?}"),
    }
}

/// T4-REC-07: Contracts can be reached through values and upgrade parameters.
#[test]
fn test_contract_from_value_and_upgradeability() {
    let discovery = opstack();
    let portal = discovery
        .contract_from_value(
            "L1CrossDomainMessenger",
            "PORTAL",
            ContractDetailsOptions::described("Portal."),
        )
        .unwrap();
    assert_eq!(portal.name, "OptimismPortal");
    assert_eq!(portal.description.as_deref(), Some("Portal."));

    let manager = discovery
        .contract_from_upgradeability("L1CrossDomainMessenger", "addressManager")
        .unwrap();
    assert_eq!(manager.name, "AddressManager");
    assert!(manager.description.is_none());
}

/// T4-REC-08: Single values classify by account kind; non-addresses fail.
#[test]
fn test_permissioned_account() {
    let discovery = opstack();
    let guardian = discovery.permissioned_account("OptimismPortal", "GUARDIAN").unwrap();
    assert_eq!(guardian.kind, AccountKind::MultiSig);
    let owner = discovery.permissioned_account("AddressManager", "owner").unwrap();
    assert_eq!(owner.kind, AccountKind::Contract);
    assert!(matches!(
        discovery.permissioned_account("SystemConfig", "gasLimit"),
        Err(AnalysisError::Value(ValueError::TypeMismatch { .. }))
    ));
}

fn nested_discovery() -> ProjectDiscovery {
    let committee = ContractRecord::new("Committee", addr(1), Upgradeability::Immutable).with_value(
        "members",
        Value::Array(vec![
            Value::Array(vec![Value::from(addr(10)), Value::from(addr(11))]),
            Value::Array(vec![Value::from(addr(2))]),
            Value::from(7u64),
        ]),
    );
    let bridge = ContractRecord::new(
        "Bridge",
        addr(2),
        Upgradeability::StarkWareProxy(StarkWareProxy {
            implementation: addr(3),
            call_implementation: None,
            upgrade_delay: 691_200,
            is_final: false,
        }),
    );
    ProjectDiscovery::new(Snapshot::new("nested", vec![committee, bridge], [addr(10), addr(11)]))
}

/// T4-REC-09: An index selects a nested array; its elements must be addresses.
#[test]
fn test_permissioned_accounts_with_index() {
    let discovery = nested_discovery();
    let first = discovery.permissioned_accounts("Committee", "members", Some(0)).unwrap();
    assert_eq!(first.len(), 2);
    assert!(first.iter().all(|a| a.kind == AccountKind::Eoa));

    let second = discovery.permissioned_accounts("Committee", "members", Some(1)).unwrap();
    assert_eq!(second[0].kind, AccountKind::Contract);

    match discovery.permissioned_accounts("Committee", "members", Some(2)) {
        Err(AnalysisError::Value(ValueError::TypeMismatch { key, .. })) => {
            assert_eq!(key, "members[2]")
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
    match discovery.permissioned_accounts("Committee", "members", Some(5)) {
        Err(AnalysisError::Value(ValueError::MissingValue { key, .. })) => {
            assert_eq!(key, "members[5]")
        }
        other => panic!("expected MissingValue, got {other:?}"),
    }
    // Without an index the outer elements are arrays, not addresses.
    assert!(discovery.permissioned_accounts("Committee", "members", None).is_err());
}

/// T4-REC-10: Upgrade delays render as a sentence; addresses are not delays.
#[test]
fn test_delay_string_from_upgradeability() {
    let discovery = nested_discovery();
    assert_eq!(
        discovery
            .delay_string_from_upgradeability("Bridge", "upgradeDelay")
            .unwrap(),
        "There is a 8 days delay on code changes."
    );
    match discovery.delay_string_from_upgradeability("Bridge", "implementation") {
        Err(AnalysisError::Value(ValueError::TypeMismatch { key, .. })) => {
            assert_eq!(key, "upgradeability.implementation")
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}

/// T4-REC-11: A contract listed as permissioned is always a Contract account.
#[test]
fn test_contract_as_permissioned() {
    let discovery = opstack();
    let admin = discovery.contract("ProxyAdmin").unwrap();
    let record = discovery.contract_as_permissioned(admin, "Upgrades the bridge.");
    assert_eq!(record.name, "ProxyAdmin");
    assert_eq!(record.accounts[0].kind, AccountKind::Contract);
    assert_eq!(record.description, "Upgrades the bridge.");
}

/// T4-REC-12: Constructor arguments fail on an out-of-range index.
#[test]
fn test_constructor_arg_out_of_range() {
    let discovery = opstack();
    match discovery.values().constructor_arg("SecurityCouncilMultisig", 0) {
        Err(AnalysisError::Value(ValueError::MissingValue { key, .. })) => {
            assert_eq!(key, "constructorArgs[0]")
        }
        other => panic!("expected MissingValue, got {other:?}"),
    }
}
