use super::{
    repository::MyLeavesRepository,
    utils::{LeaveRow, LOAD_BALANCE_FAILED, LOAD_LEAVES_FAILED},
};
use crate::{
    api::{use_api_client, BalanceReport},
    utils::date::current_year,
};
use leptos::*;

pub async fn load_rows(repo: &MyLeavesRepository) -> Result<Vec<LeaveRow>, String> {
    repo.list()
        .await
        .map(|records| records.iter().map(LeaveRow::from).collect())
        .map_err(|err| err.message_or(LOAD_LEAVES_FAILED))
}

pub async fn load_balance(repo: &MyLeavesRepository, year: i32) -> Result<BalanceReport, String> {
    repo.balance(year)
        .await
        .map_err(|err| err.message_or(LOAD_BALANCE_FAILED))
}

#[derive(Clone, Copy)]
pub struct MyLeavesViewModel {
    pub year: RwSignal<i32>,
    pub rows: Resource<(), Result<Vec<LeaveRow>, String>>,
    pub balance: Resource<i32, Result<BalanceReport, String>>,
}

impl MyLeavesViewModel {
    pub fn new() -> Self {
        let repository = store_value(MyLeavesRepository::new(use_api_client()));
        let year = create_rw_signal(current_year());

        let rows = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { load_rows(&repo).await }
            },
        );

        let balance = create_resource(
            move || year.get(),
            move |year| {
                let repo = repository.get_value();
                async move { load_balance(&repo, year).await }
            },
        );

        Self {
            year,
            rows,
            balance,
        }
    }
}

impl Default for MyLeavesViewModel {
    fn default() -> Self {
        Self::new()
    }
}
