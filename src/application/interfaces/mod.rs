/// Student data service interface
pub mod student;
