use crate::api::{ApiClient, ApiError, BalanceReport};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn balance(&self, year: i32) -> Result<BalanceReport, ApiError> {
        self.client.my_balance(Some(year)).await
    }
}
