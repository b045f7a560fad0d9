use super::repository::DashboardRepository;
use crate::{
    api::{use_api_client, BalanceReport},
    state::{use_session, Session},
    utils::date::current_year,
};
use leptos::*;

pub const LOAD_BALANCE_FAILED: &str = "Failed to load your balance.";

#[derive(Clone)]
pub struct DashboardViewModel {
    pub session: Session,
    pub balance: Resource<i32, Result<BalanceReport, String>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let session = use_session().snapshot();
        let repository = store_value(DashboardRepository::new(use_api_client()));
        let balance = create_resource(current_year, move |year| {
            let repo = repository.get_value();
            async move {
                repo.balance(year)
                    .await
                    .map_err(|err| err.message_or(LOAD_BALANCE_FAILED))
            }
        });
        Self { session, balance }
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
