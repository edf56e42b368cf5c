pub mod csv;
pub mod roster;
