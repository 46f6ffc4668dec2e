mod error;
mod traits;
mod types;

pub use error::{PersistenceError, Result, StoreOperation};
pub use traits::PersistenceAdapter;
pub use types::AttributesDocument;
