pub mod analysis;
pub mod assessment;
pub mod classification;
pub mod common;
pub mod inference;
pub mod prediction;
pub mod recommendation;
