//! Package sorting: decide whether a package goes to the standard, special
//! or rejected stack from its dimensions and mass.

pub mod classifier;
pub mod cli;
pub mod error;

pub use classifier::{classify, explain, Category, Classification};
pub use error::ClassifyError;
