pub mod calculations;
pub mod format;
pub mod models;
pub mod parse;

pub use calculations::ObligationCalculator;
pub use models::*;
