pub mod patients;
pub mod recommend;
pub mod simulate;
pub mod system;
