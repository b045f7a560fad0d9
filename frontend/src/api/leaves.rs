use super::{
    client::ApiClient,
    types::{ApiError, BalanceReport, CreateLeaveRequest, DecisionRequest, LeaveRecord},
};

fn year_query(year: Option<i32>) -> Vec<(&'static str, String)> {
    year.map(|y| vec![("year", y.to_string())])
        .unwrap_or_default()
}

impl ApiClient {
    pub async fn create_leave(&self, request: CreateLeaveRequest) -> Result<LeaveRecord, ApiError> {
        let response = self
            .send(
                self.http_client()
                    .post(self.endpoint("/leaves"))
                    .json(&request),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn my_leaves(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        let response = self
            .send(self.http_client().get(self.endpoint("/leaves/mine")))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn pending_leaves(&self) -> Result<Vec<LeaveRecord>, ApiError> {
        let response = self
            .send(self.http_client().get(self.endpoint("/leaves/pending")))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn approve_leave(&self, id: i64, remark: &str) -> Result<(), ApiError> {
        self.decide_leave(id, "approve", remark).await
    }

    pub async fn reject_leave(&self, id: i64, remark: &str) -> Result<(), ApiError> {
        self.decide_leave(id, "reject", remark).await
    }

    async fn decide_leave(&self, id: i64, action: &str, remark: &str) -> Result<(), ApiError> {
        let response = self
            .send(
                self.http_client()
                    .post(self.endpoint(&format!("/leaves/{}/{}", id, action)))
                    .json(&DecisionRequest {
                        remark: remark.to_string(),
                    }),
            )
            .await?;
        self.map_empty_response(response).await
    }

    pub async fn my_balance(&self, year: Option<i32>) -> Result<BalanceReport, ApiError> {
        self.balance_at("/leaves/balance", year).await
    }

    pub async fn all_balances(&self, year: Option<i32>) -> Result<Vec<BalanceReport>, ApiError> {
        let response = self
            .send(
                self.http_client()
                    .get(self.endpoint("/leaves/balance/all"))
                    .query(&year_query(year)),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn user_balance(
        &self,
        user_id: i64,
        year: Option<i32>,
    ) -> Result<BalanceReport, ApiError> {
        self.balance_at(&format!("/leaves/balance/{}", user_id), year)
            .await
    }

    async fn balance_at(&self, path: &str, year: Option<i32>) -> Result<BalanceReport, ApiError> {
        let response = self
            .send(
                self.http_client()
                    .get(self.endpoint(path))
                    .query(&year_query(year)),
            )
            .await?;
        self.map_json_response(response).await
    }
}
