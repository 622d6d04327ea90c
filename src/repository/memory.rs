use crate::entity::animal::{Animal, AnimalChanges};
use crate::entity::group::Group;
use crate::entity::role::{Role, RoleKind};
use crate::entity::user::{NewUser, User};
use crate::error::AppError;
use crate::error::db_error::DbError;
use crate::error::resource_error::ResourceError;
use crate::repository::Repositories;
use crate::repository::animal_repository::AnimalRepositoryTrait;
use crate::repository::group_repository::GroupRepositoryTrait;
use crate::repository::role_repository::RoleRepositoryTrait;
use crate::repository::user_repository::UserRepositoryTrait;
use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// Store used by unit and router tests. Mirrors the Postgres constraints the
/// services rely on: unique username/email and the animal -> group check.
pub struct MemoryStore {
    users: DashMap<i64, User>,
    roles: Vec<Role>,
    groups: DashMap<i64, Group>,
    animals: DashMap<i64, Animal>,
    next_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            roles: vec![
                Role { id: 1, role: RoleKind::User },
                Role { id: 2, role: RoleKind::Moderator },
                Role { id: 3, role: RoleKind::Administrator },
            ],
            groups: DashMap::new(),
            animals: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// A store without seeded roles, to exercise missing reference data.
    pub fn without_roles() -> Self {
        Self {
            roles: Vec::new(),
            ..Self::new()
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    fn sorted<T: Clone>(map: &DashMap<i64, T>) -> Vec<T> {
        let mut entries: Vec<(i64, T)> = map.iter().map(|e| (*e.key(), e.value().clone())).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter().map(|(_, value)| value).collect()
    }

    fn existing_group(&self, group_id: i64) -> Result<Group, AppError> {
        self.groups
            .get(&group_id)
            .map(|g| g.clone())
            .ok_or_else(|| ResourceError::group_not_found(group_id).into())
    }

    fn animals_where(&self, predicate: impl Fn(&Animal) -> bool) -> Vec<Animal> {
        Self::sorted(&self.animals).into_iter().filter(|a| predicate(a)).collect()
    }
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self::from_store(Arc::new(MemoryStore::new()))
    }

    pub fn from_store(store: Arc<MemoryStore>) -> Self {
        Self {
            users: store.clone(),
            roles: store.clone(),
            groups: store.clone(),
            animals: store,
        }
    }
}

#[async_trait]
impl UserRepositoryTrait for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.iter().find(|u| u.username == username).map(|u| u.clone()))
    }

    async fn exists_by_username_or_email(&self, username: &str, email: &str) -> Result<bool, AppError> {
        Ok(self.users.iter().any(|u| u.username == username || u.email == email))
    }

    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Ok(Self::sorted(&self.users))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, AppError> {
        if self.users.iter().any(|u| u.username == user.username || u.email == user.email) {
            return Err(DbError::DataIntegrity("A record with the same unique value already exists".into()).into());
        }
        let role = self
            .roles
            .iter()
            .find(|r| r.id == user.role_id)
            .cloned()
            .ok_or_else(|| AppError::from(DbError::DataIntegrity("unknown role".into())))?;

        let created = User {
            id: self.next_id(),
            name: user.name.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            password: user.password_hash.clone(),
            status: user.status,
            roles: vec![role],
            created_at: Utc::now(),
        };
        self.users.insert(created.id, created.clone());
        Ok(created)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.users.remove(&id).is_some())
    }
}

#[async_trait]
impl RoleRepositoryTrait for MemoryStore {
    async fn find_by_role(&self, role: RoleKind) -> Result<Option<Role>, AppError> {
        Ok(self.roles.iter().find(|r| r.role == role).cloned())
    }
}

#[async_trait]
impl GroupRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Group>, AppError> {
        Ok(Self::sorted(&self.groups))
    }

    async fn find(&self, id: i64) -> Result<Option<Group>, AppError> {
        Ok(self.groups.get(&id).map(|g| g.clone()))
    }

    async fn find_by_name_ignore_case(&self, name: &str) -> Result<Option<Group>, AppError> {
        Ok(Self::sorted(&self.groups)
            .into_iter()
            .find(|g| g.name.to_lowercase() == name.to_lowercase()))
    }

    async fn insert(&self, name: &str) -> Result<Group, AppError> {
        let group = Group {
            id: self.next_id(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn update(&self, id: i64, name: &str) -> Result<Option<Group>, AppError> {
        let Some(mut group) = self.groups.get_mut(&id) else {
            return Ok(None);
        };
        group.name = name.to_string();
        let updated = group.clone();
        drop(group);

        for mut animal in self.animals.iter_mut() {
            if animal.group.id == id {
                animal.group = updated.clone();
            }
        }
        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        if self.animals.iter().any(|a| a.group.id == id) {
            return Err(DbError::DataIntegrity("The record is still referenced by other records".into()).into());
        }
        Ok(self.groups.remove(&id).is_some())
    }
}

#[async_trait]
impl AnimalRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Animal>, AppError> {
        Ok(Self::sorted(&self.animals))
    }

    async fn find(&self, id: i64) -> Result<Option<Animal>, AppError> {
        Ok(self.animals.get(&id).map(|a| a.clone()))
    }

    async fn find_by_group_id(&self, group_id: i64) -> Result<Vec<Animal>, AppError> {
        Ok(self.animals_where(|a| a.group.id == group_id))
    }

    async fn find_by_group_name_ignore_case(&self, group_name: &str) -> Result<Vec<Animal>, AppError> {
        let needle = group_name.to_lowercase();
        Ok(self.animals_where(|a| a.group.name.to_lowercase() == needle))
    }

    async fn insert(&self, changes: &AnimalChanges) -> Result<Animal, AppError> {
        let group = self.existing_group(changes.group_id)?;
        let animal = Animal {
            id: self.next_id(),
            scientific_name: changes.scientific_name.clone(),
            specie: changes.specie.clone(),
            size: changes.size,
            mass: changes.mass,
            status: changes.status,
            group,
            created_at: Utc::now(),
        };
        self.animals.insert(animal.id, animal.clone());
        Ok(animal)
    }

    async fn update(&self, id: i64, changes: &AnimalChanges) -> Result<Option<Animal>, AppError> {
        let group = self.existing_group(changes.group_id)?;
        let Some(mut animal) = self.animals.get_mut(&id) else {
            return Ok(None);
        };
        animal.scientific_name = changes.scientific_name.clone();
        animal.specie = changes.specie.clone();
        animal.size = changes.size;
        animal.mass = changes.mass;
        animal.status = changes.status;
        animal.group = group;
        Ok(Some(animal.clone()))
    }

    async fn rename(&self, id: i64, scientific_name: &str, specie: &str) -> Result<Option<Animal>, AppError> {
        let Some(mut animal) = self.animals.get_mut(&id) else {
            return Ok(None);
        };
        animal.scientific_name = scientific_name.to_string();
        animal.specie = specie.to_string();
        Ok(Some(animal.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.animals.remove(&id).is_some())
    }
}
