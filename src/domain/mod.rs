pub mod account;
pub mod account_number;
pub mod error;
pub mod float_account;

pub use account::Account;
pub use account_number::AccountNumber;
pub use error::Error;
pub use float_account::FloatAccount;
