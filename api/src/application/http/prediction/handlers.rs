pub mod batch_predict;
pub mod predict;
