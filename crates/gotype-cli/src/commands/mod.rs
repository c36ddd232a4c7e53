pub mod dispatch;
pub mod fields;
pub mod methods;
pub mod shared;
pub mod types;
