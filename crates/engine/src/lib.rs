//! Domain of the Jumantik admin console.
//!
//! Two screens, accounts and reports, share one shape of logic: an ordered
//! [`Collection`], a pure filter/search over it, and a single-slot
//! [`EditSession`] whose draft is committed back by id. [`Board`] ties the
//! three together for one screen. Reports can also be exported to CSV (see
//! [`export`]).

pub use accounts::{Account, Role};
pub use board::{Board, SaveOutcome};
pub use collection::{Collection, Placement};
pub use error::EngineError;
pub use filter::Selector;
pub use record::Record;
pub use reports::{Category, Report};
pub use session::{Draft, EditSession, Origin};

pub mod accounts;
pub mod export;
pub mod filter;
pub mod seed;

mod board;
mod collection;
mod error;
mod record;
mod reports;
mod session;

pub type ResultEngine<T> = Result<T, EngineError>;

/// Board of the accounts screen.
pub type AccountsBoard = Board<Account>;

/// Board of the reports screen.
pub type ReportsBoard = Board<Report>;
