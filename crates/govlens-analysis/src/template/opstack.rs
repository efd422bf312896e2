//! OP stack description tables.

use super::types::{ArgumentSource, ContractDescriptionTemplate, PermissionTemplate, ValueSource};

pub const PERMISSION_TEMPLATES: &[PermissionTemplate] = &[
    PermissionTemplate {
        name: "ProxyAdmin",
        source: ValueSource {
            contract: "AddressManager",
            value: "owner",
        },
        description: "Admin of the {0} proxies. It's controlled by the {1}.",
        argument_sources: &[
            &[
                ArgumentSource::forward("admin"),
                ArgumentSource::reverse("addressManager"),
            ],
            &[ArgumentSource::reverse("owner")],
        ],
    },
    PermissionTemplate {
        name: "Sequencer",
        source: ValueSource {
            contract: "SystemConfig",
            value: "batcherHash",
        },
        description: "Central actor allowed to commit L2 transactions to L1.",
        argument_sources: &[],
    },
    PermissionTemplate {
        name: "Proposer",
        source: ValueSource {
            contract: "L2OutputOracle",
            value: "PROPOSER",
        },
        description: "Central actor allowed to post new L2 state roots to L1.",
        argument_sources: &[],
    },
];

pub const CONTRACT_DESCRIPTIONS: &[ContractDescriptionTemplate] = &[
    ContractDescriptionTemplate {
        name: "L2OutputOracle",
        core_description: "The {0} contract contains a list of proposed state roots which Proposers assert to be a result of block execution. Currently only the PROPOSER address can submit new state roots.",
    },
    ContractDescriptionTemplate {
        name: "OptimismPortal",
        core_description: "The {0} contract is the main entry point to deposit funds from L1 to L2. It also allows to prove and finalize withdrawals.",
    },
    ContractDescriptionTemplate {
        name: "SystemConfig",
        core_description: "It contains configuration parameters such as the Sequencer address, the L2 gas limit and the unsafe block signer address.",
    },
    ContractDescriptionTemplate {
        name: "L1CrossDomainMessenger",
        core_description: "The {0} (L1xDM) contract sends messages from L1 to L2, and relays messages from L2 onto L1. In the event that a message sent from L1 to L2 is rejected for exceeding the L2 epoch gas limit, it can be resubmitted via this contract's replay function.",
    },
];
