pub mod entities;
pub mod mock;
pub mod ports;
pub mod services;

pub use entities::*;
pub use mock::MockPredictor;
pub use ports::*;
pub use services::LegacyPredictor;
