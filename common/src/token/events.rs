use primitive_types::U256;
use serde::{Deserialize, Serialize};

use crate::crypto::Address;

/// Record of a state transition, appended only when the call succeeds
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TokenEvent {
    Transfer {
        from: Address,
        to: Address,
        amount: U256,
    },
    Burn {
        from: Address,
        amount: U256,
    },
    Mint {
        to: Address,
        amount: U256,
    },
    Approval {
        owner: Address,
        spender: Address,
        amount: U256,
    },
    Paused {
        by: Address,
    },
    Unpaused {
        by: Address,
    },
    TransferWithBurnEnabled {
        by: Address,
    },
    TransferWithBurnDisabled {
        by: Address,
    },
    BurnRateUpdated {
        previous: u64,
        rate: u64,
    },
    OwnershipTransferred {
        previous: Address,
        owner: Address,
    },
}
