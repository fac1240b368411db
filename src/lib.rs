pub mod cs;
pub mod error;

pub use cs::{combinatorial, denominations, dynamic};
pub use error::{Error, Result};
