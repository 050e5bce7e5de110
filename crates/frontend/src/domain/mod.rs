pub mod customers;
pub mod deals;
