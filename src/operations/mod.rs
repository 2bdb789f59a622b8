pub mod compose;
pub mod curried;
pub mod query;
pub mod transform;
