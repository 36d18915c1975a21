pub mod building;
pub mod catalog;
