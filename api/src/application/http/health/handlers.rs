pub mod health_check;
pub mod model_info;
