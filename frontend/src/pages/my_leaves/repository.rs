use crate::api::{ApiClient, ApiError, BalanceReport, LeaveRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct MyLeavesRepository {
    client: Rc<ApiClient>,
}

impl MyLeavesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.my_leaves().await
    }

    pub async fn balance(&self, year: i32) -> Result<BalanceReport, ApiError> {
        self.client.my_balance(Some(year)).await
    }
}
