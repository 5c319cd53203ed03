pub mod attendance;
pub mod fees;
pub mod index;
pub mod students;
