use crate::repository::Repositories;
use crate::service::animal_service::AnimalService;

#[derive(Clone)]
pub struct AnimalState {
    pub animal_service: AnimalService,
}

impl AnimalState {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            animal_service: AnimalService::new(repositories),
        }
    }
}
