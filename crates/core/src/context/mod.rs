mod types;

pub use types::{Device, Person, RequestContext, User};
