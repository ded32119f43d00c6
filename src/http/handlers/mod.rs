pub mod attendance;
pub mod events;
pub mod grades;
pub mod health;
pub mod students;
pub mod teachers;
