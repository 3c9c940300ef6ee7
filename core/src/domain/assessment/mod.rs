pub mod entities;
pub mod parser;

pub use entities::*;
pub use parser::parse_health_response;
