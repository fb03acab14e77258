pub mod balance;
pub mod rubato;
pub mod suggest;
pub mod week;
