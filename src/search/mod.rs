//! Search data types and the substring filter.

mod filter;
mod item;
mod outcome;
mod query;

pub use filter::filter;
pub use item::{Item, load_items, parse_items};
pub use outcome::{Navigation, SearchOutcome};
pub use query::Query;
