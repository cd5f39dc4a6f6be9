pub mod calculator;
pub mod lookup;
pub mod materiality;
pub mod selection;
