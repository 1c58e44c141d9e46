pub mod project_repo;

pub use project_repo::ProjectRepo;
