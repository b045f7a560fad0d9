use super::utils::Decision;
use crate::api::{ApiClient, ApiError, BalanceReport, LeaveRecord};
use std::rc::Rc;

#[derive(Clone)]
pub struct ApprovalsRepository {
    client: Rc<ApiClient>,
}

impl ApprovalsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn pending(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        self.client.pending_leaves().await
    }

    pub async fn decide(&self, id: i64, decision: Decision, remark: &str) -> Result<(), ApiError> {
        match decision {
            Decision::Approve => self.client.approve_leave(id, remark).await,
            Decision::Reject => self.client.reject_leave(id, remark).await,
        }
    }

    pub async fn balances(&self, year: i32) -> Result<Vec<BalanceReport>, ApiError> {
        self.client.all_balances(Some(year)).await
    }
}
