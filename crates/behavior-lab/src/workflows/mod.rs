pub mod advisor;
pub mod diagnostic;
pub mod directory;
