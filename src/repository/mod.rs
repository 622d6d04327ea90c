pub(crate) mod animal_repository;
pub(crate) mod group_repository;
#[cfg(test)]
pub(crate) mod memory;
pub(crate) mod role_repository;
pub(crate) mod user_repository;

use crate::config::database::Database;
use animal_repository::{AnimalRepository, AnimalRepositoryTrait};
use group_repository::{GroupRepository, GroupRepositoryTrait};
use role_repository::{RoleRepository, RoleRepositoryTrait};
use std::sync::Arc;
use user_repository::{UserRepository, UserRepositoryTrait};

/// Store handles shared by every service.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepositoryTrait>,
    pub roles: Arc<dyn RoleRepositoryTrait>,
    pub groups: Arc<dyn GroupRepositoryTrait>,
    pub animals: Arc<dyn AnimalRepositoryTrait>,
}

impl Repositories {
    pub fn postgres(db_conn: &Arc<Database>) -> Self {
        Self {
            users: Arc::new(UserRepository::new(db_conn)),
            roles: Arc::new(RoleRepository::new(db_conn)),
            groups: Arc::new(GroupRepository::new(db_conn)),
            animals: Arc::new(AnimalRepository::new(db_conn)),
        }
    }
}
