//! Repository traits (ports)

pub mod menu_repository;

#[cfg(test)]
pub(crate) mod in_memory;

pub use menu_repository::{MenuRepository, MenuUnitOfWork};

#[cfg(any(test, feature = "mock"))]
pub use menu_repository::MockMenuRepository;
