pub mod backup;
pub mod calculator;
pub mod logic;
pub mod scan;
