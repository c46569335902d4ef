pub mod environment_kind;
pub mod web_type;

pub use environment_kind::*;
pub use web_type::*;
