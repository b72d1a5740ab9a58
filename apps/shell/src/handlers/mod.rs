pub mod check;
pub mod lookup;
