//! In-process adapters for running without external infrastructure.

mod student_repository;

pub use student_repository::InMemoryStudentRepository;
