pub mod bikes;
pub mod forecast;
pub mod horizon;
pub mod weather;
