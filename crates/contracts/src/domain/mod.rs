pub mod customer;
pub mod deal;
