//! Single-asset token ledger
//!
//! Owner-gated configuration (pause gate, burn policy, mint), burn-aware
//! transfers and allowances over an in-memory state.

mod error;
mod events;
mod ledger;
pub mod operations;
mod state;
mod types;

pub use error::*;
pub use events::*;
pub use ledger::*;
pub use state::*;
pub use types::*;
