use crate::api::{ApiClient, ApiError, CreateLeaveRequest, LeaveRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRequestRepository {
    client: Rc<ApiClient>,
}

impl LeaveRequestRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn submit(&self, payload: CreateLeaveRequest) -> Result<LeaveRecord, ApiError> {
        self.client.create_leave(payload).await
    }
}
