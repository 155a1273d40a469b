// Types layer - All data structures
pub mod db;
pub mod internal;

pub use internal::{Label, Session};
