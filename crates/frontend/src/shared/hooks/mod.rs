pub mod use_debounce;
pub mod use_fetch;

pub use use_debounce::use_debounce;
pub use use_fetch::{use_fetch, UseFetch};
