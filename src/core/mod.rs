pub mod runner;
pub mod validator;

pub use crate::domain::catalog::Catalog;
pub use crate::domain::model::{Definition, Model, Port};
pub use crate::domain::ports::DocumentSource;
pub use crate::utils::error::Result;
