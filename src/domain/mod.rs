mod ledger;
mod loan;
mod money;
mod transaction;

pub use ledger::*;
pub use loan::*;
pub use money::*;
pub use transaction::*;
