use crate::repository::Repositories;
use crate::service::group_service::GroupService;

#[derive(Clone)]
pub struct GroupState {
    pub group_service: GroupService,
}

impl GroupState {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            group_service: GroupService::new(repositories),
        }
    }
}
