//! pocketmint-domain
//!
//! Pure domain models (Expense, Reminder, Investment, chat transcripts).
//! No I/O, no storage. Only data types and core enums.

pub mod chat;
pub mod common;
pub mod expense;
pub mod investment;
pub mod reminder;

pub use chat::*;
pub use common::*;
pub use expense::*;
pub use investment::*;
pub use reminder::*;
