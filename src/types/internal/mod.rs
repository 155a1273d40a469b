pub mod label;
pub mod session;

pub use label::Label;
pub use session::Session;
