//! API service modules for Airwallex endpoints.
//!
//! Each service provides methods for interacting with a specific subset of
//! the Airwallex API. Services are thin accessors over the request
//! dispatcher: they name the endpoint and the response type and inherit
//! authentication, error mapping and pagination from the client core.

mod accounts;
mod balances;
mod beneficiaries;
mod cards;
mod fx;
mod invoices;
mod payments;
mod transactions;

pub use accounts::AccountsService;
pub use balances::{BalanceHistoryQuery, BalancesService};
pub use beneficiaries::{BeneficiariesQuery, BeneficiariesService};
pub use cards::{CardsQuery, CardsService};
pub use fx::{ConversionsQuery, FxService};
pub use invoices::{InvoicesQuery, InvoicesService};
pub use payments::{PaymentsQuery, PaymentsService};
pub use transactions::{TransactionsQuery, TransactionsService};
