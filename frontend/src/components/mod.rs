pub mod balance;
pub mod guard;
pub mod layout;
