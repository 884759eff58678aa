pub mod alert;
pub mod budget;
pub mod composite;
pub mod prediction;
pub mod slo;
