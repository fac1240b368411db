pub mod combinatorial;
pub mod denominations;
pub mod dynamic;

// Re-export all modules
pub use combinatorial::*;
pub use denominations::Denominations;
pub use dynamic::*;
