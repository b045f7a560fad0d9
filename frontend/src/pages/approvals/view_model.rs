use super::{
    repository::ApprovalsRepository,
    utils::{normalize_remark, Decision, LOAD_BALANCES_FAILED, LOAD_PENDING_FAILED},
};
use crate::{
    api::{use_api_client, BalanceReport, LeaveRecord},
    state::RequestDedup,
    utils::{date::current_year, message::MessageState},
};
use leptos::*;
use std::collections::HashMap;

#[derive(Clone, Copy)]
pub struct ApprovalsViewModel {
    repository: StoredValue<ApprovalsRepository>,
    in_flight: StoredValue<RequestDedup<i64>>,
    // Bumped whenever `in_flight` changes so views can track it.
    acting: RwSignal<u32>,
    pub rows: RwSignal<Vec<LeaveRecord>>,
    pub loading: RwSignal<bool>,
    pub message: RwSignal<MessageState>,
    pub remarks: RwSignal<HashMap<i64, String>>,
    pub show_balances: RwSignal<bool>,
    pub balances: RwSignal<Vec<BalanceReport>>,
    pub balances_loading: RwSignal<bool>,
    pub year: RwSignal<i32>,
}

impl ApprovalsViewModel {
    pub fn new() -> Self {
        Self::with_repository(ApprovalsRepository::new(use_api_client()))
    }

    pub fn with_repository(repository: ApprovalsRepository) -> Self {
        Self {
            repository: store_value(repository),
            in_flight: store_value(RequestDedup::new()),
            acting: create_rw_signal(0),
            rows: create_rw_signal(Vec::new()),
            loading: create_rw_signal(false),
            message: create_rw_signal(MessageState::default()),
            remarks: create_rw_signal(HashMap::new()),
            show_balances: create_rw_signal(false),
            balances: create_rw_signal(Vec::new()),
            balances_loading: create_rw_signal(false),
            year: create_rw_signal(current_year()),
        }
    }

    pub fn is_acting(&self, id: i64) -> bool {
        self.acting.with(|_| ());
        self.in_flight.with_value(|set| set.contains(&id))
    }

    pub fn remark_for(&self, id: i64) -> String {
        self.remarks
            .with(|remarks| remarks.get(&id).cloned().unwrap_or_default())
    }

    pub fn set_remark(&self, id: i64, value: String) {
        self.remarks.update(|remarks| {
            remarks.insert(id, value);
        });
    }

    // False once the owning page has been torn down; results arriving after
    // that are dropped.
    fn is_live(&self) -> bool {
        self.repository.try_with_value(|_| ()).is_some()
    }

    pub async fn refresh(&self) -> Result<(), String> {
        let Some(repo) = self.repository.try_get_value() else {
            return Ok(());
        };
        self.loading.set(true);
        let result = repo.pending().await;
        if !self.is_live() {
            return Ok(());
        }
        self.loading.set(false);
        match result {
            Ok(rows) => {
                self.rows.set(rows);
                Ok(())
            }
            Err(err) => {
                let msg = err.message_or(LOAD_PENDING_FAILED);
                log::warn!("Pending approvals not loaded: {}", err);
                self.message.update(|m| m.set_error(msg.clone()));
                Err(msg)
            }
        }
    }

    /// Loads team balances for the selected year. A response for a year that
    /// is no longer selected is discarded.
    pub async fn load_balances(&self) -> Result<(), String> {
        let Some(repo) = self.repository.try_get_value() else {
            return Ok(());
        };
        let year = self.year.get_untracked();
        self.balances_loading.set(true);
        let result = repo.balances(year).await;
        if !self.is_live() || self.year.get_untracked() != year {
            return Ok(());
        }
        self.balances_loading.set(false);
        match result {
            Ok(reports) => {
                self.balances.set(reports);
                Ok(())
            }
            Err(err) => {
                let msg = err.message_or(LOAD_BALANCES_FAILED);
                self.message.update(|m| m.set_error(msg.clone()));
                Err(msg)
            }
        }
    }

    pub async fn toggle_balances(&self) {
        let visible = !self.show_balances.get_untracked();
        self.show_balances.set(visible);
        if visible {
            let _ = self.load_balances().await;
        }
    }

    pub async fn change_year(&self, year: i32) {
        self.year.set(year);
        if self.show_balances.get_untracked() {
            let _ = self.load_balances().await;
        }
    }

    /// Approves or rejects one request. Returns `None` without calling the
    /// service when a decision for `id` is still outstanding.
    pub async fn decide(
        &self,
        id: i64,
        decision: Decision,
        remark: Option<String>,
    ) -> Option<Result<(), String>> {
        let Some(guard) = self.in_flight.try_with_value(|set| set.begin(id)).flatten() else {
            log::debug!("Leave {} already has a decision in flight", id);
            return None;
        };
        self.acting.update(|tick| *tick = tick.wrapping_add(1));

        let remark = normalize_remark(remark.as_deref());
        let Some(repo) = self.repository.try_get_value() else {
            return None;
        };
        let result = repo.decide(id, decision, &remark).await;

        drop(guard);
        if !self.is_live() {
            log::debug!("Decision on leave {} arrived after the page closed", id);
            return Some(result.map_err(|err| err.message_or(decision.failure_message())));
        }
        self.acting.update(|tick| *tick = tick.wrapping_add(1));

        match result {
            Ok(()) => {
                log::info!("Leave {} {}d", id, decision.label().to_lowercase());
                self.message.update(|m| m.clear());
                self.remarks.update(|remarks| {
                    remarks.remove(&id);
                });
                let _ = self.refresh().await;
                if self.show_balances.try_get_untracked().unwrap_or(false) {
                    let _ = self.load_balances().await;
                }
                Some(Ok(()))
            }
            Err(err) => {
                let msg = err.message_or(decision.failure_message());
                self.message.update(|m| m.set_error(msg.clone()));
                Some(Err(msg))
            }
        }
    }
}

impl Default for ApprovalsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::{ApiClient, Role};
    use crate::test_support::helpers::session_with;
    use serde_json::json;

    fn view_model(server: &MockServer) -> ApprovalsViewModel {
        let api = ApiClient::new(server.url("/api"), session_with(Role::Manager));
        ApprovalsViewModel::with_repository(ApprovalsRepository::new(api))
    }

    fn pending_row(id: i64) -> serde_json::Value {
        json!({
            "id": id,
            "employee_name": "Ann",
            "type": "SICK",
            "start_date": "2025-08-26",
            "end_date": "2025-08-27",
            "reason": null
        })
    }

    fn mock_pending(server: &MockServer, rows: serde_json::Value) {
        server.mock(|when, then| {
            when.method(GET).path("/api/leaves/pending");
            then.status(200).json_body(rows);
        });
    }

    fn mock_balances(server: &MockServer) {
        server.mock(|when, then| {
            when.method(GET).path("/api/leaves/balance/all");
            then.status(200).json_body(json!([{
                "user_id": 3,
                "name": "Ann",
                "year": 2024,
                "balances": { "SICK": { "allowed": 12, "taken": 2, "remaining": 10 } }
            }]));
        });
    }

    #[tokio::test]
    async fn double_approve_sends_one_request() {
        let server = MockServer::start_async().await;
        mock_pending(&server, json!([]));
        server.mock(|when, then| {
            when.method(POST).path("/api/leaves/5/approve");
            then.status(200).json_body(json!({ "message": "Leave approved" }));
        });

        let runtime = create_runtime();
        let vm = view_model(&server);
        let (first, second) = futures::join!(
            vm.decide(5, Decision::Approve, Some(" fine ".into())),
            vm.decide(5, Decision::Approve, None)
        );

        assert_eq!(first, Some(Ok(())));
        assert_eq!(second, None);
        let sent = server.received(POST, "/api/leaves/5/approve");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].body, Some(json!({ "remark": "fine" })));
        assert!(!vm.is_acting(5));
        assert_eq!(server.hits(GET, "/api/leaves/pending"), 1);
        runtime.dispose();
    }

    #[tokio::test]
    async fn different_ids_run_side_by_side() {
        let server = MockServer::start_async().await;
        mock_pending(&server, json!([]));
        for id in [1, 2] {
            server.mock(move |when, then| {
                when.method(POST).path(&format!("/api/leaves/{}/reject", id));
                then.status(200).json_body(json!({}));
            });
        }

        let runtime = create_runtime();
        let vm = view_model(&server);
        let (a, b) = futures::join!(
            vm.decide(1, Decision::Reject, None),
            vm.decide(2, Decision::Reject, None)
        );
        assert_eq!(a, Some(Ok(())));
        assert_eq!(b, Some(Ok(())));
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_decision_releases_the_id() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/leaves/7/reject");
            then.status(500).json_body(json!({}));
        });

        let runtime = create_runtime();
        let vm = view_model(&server);
        let first = vm.decide(7, Decision::Reject, None).await;
        assert_eq!(
            first,
            Some(Err("Failed to reject. Please try again.".to_string()))
        );
        assert_eq!(
            vm.message.get_untracked().error.as_deref(),
            Some("Failed to reject. Please try again.")
        );

        let retry = vm.decide(7, Decision::Reject, None).await;
        assert!(retry.is_some());
        assert_eq!(server.hits(POST, "/api/leaves/7/reject"), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn server_message_wins_over_fallback() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/leaves/8/approve");
            then.status(400).json_body(json!({ "message": "Leave is not pending" }));
        });

        let runtime = create_runtime();
        let vm = view_model(&server);
        let result = vm.decide(8, Decision::Approve, None).await;
        assert_eq!(result, Some(Err("Leave is not pending".to_string())));
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_loads_rows_or_reports_failure() {
        let server = MockServer::start_async().await;
        mock_pending(&server, json!([pending_row(4), pending_row(6)]));

        let runtime = create_runtime();
        let vm = view_model(&server);
        vm.refresh().await.unwrap();
        assert_eq!(vm.rows.get_untracked().len(), 2);
        assert!(!vm.loading.get_untracked());

        let broken = MockServer::start_async().await;
        broken.mock(|when, then| {
            when.method(GET).path("/api/leaves/pending");
            then.status(503).json_body(json!({}));
        });
        let vm = view_model(&broken);
        assert_eq!(
            vm.refresh().await,
            Err("Failed to load pending approvals.".to_string())
        );
        runtime.dispose();
    }

    #[tokio::test]
    async fn balances_load_only_while_visible() {
        let server = MockServer::start_async().await;
        mock_balances(&server);

        let runtime = create_runtime();
        let vm = view_model(&server);
        vm.change_year(2023).await;
        assert_eq!(server.hits(GET, "/api/leaves/balance/all"), 0);

        vm.toggle_balances().await;
        assert!(vm.show_balances.get_untracked());
        assert_eq!(vm.balances.get_untracked().len(), 1);

        vm.change_year(2024).await;
        let sent = server.received(GET, "/api/leaves/balance/all");
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].query.as_deref(), Some("year=2023"));
        assert_eq!(sent[1].query.as_deref(), Some("year=2024"));

        vm.toggle_balances().await;
        assert!(!vm.show_balances.get_untracked());
        assert_eq!(server.hits(GET, "/api/leaves/balance/all"), 2);
        runtime.dispose();
    }

    #[tokio::test]
    async fn approval_refreshes_visible_balances() {
        let server = MockServer::start_async().await;
        mock_pending(&server, json!([]));
        mock_balances(&server);
        server.mock(|when, then| {
            when.method(POST).path("/api/leaves/9/approve");
            then.status(200).json_body(json!({}));
        });

        let runtime = create_runtime();
        let vm = view_model(&server);
        vm.toggle_balances().await;
        vm.set_remark(9, "ok".into());
        vm.decide(9, Decision::Approve, Some(vm.remark_for(9)))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(server.hits(GET, "/api/leaves/balance/all"), 2);
        assert_eq!(server.hits(GET, "/api/leaves/pending"), 1);
        assert_eq!(vm.remark_for(9), "");
        runtime.dispose();
    }

    #[tokio::test]
    async fn closing_the_page_mid_decision_drops_the_result() {
        let server = MockServer::start_async().await;
        mock_pending(&server, json!([]));
        server.mock(|when, then| {
            when.method(POST).path("/api/leaves/5/approve");
            then.status(200).json_body(json!({}));
        });

        let runtime = create_runtime();
        let vm = view_model(&server);
        vm.show_balances.set(true);
        let (result, ()) = futures::join!(vm.decide(5, Decision::Approve, None), async {
            vm.repository.dispose();
            vm.in_flight.dispose();
            vm.show_balances.dispose();
            vm.rows.dispose();
        });

        assert_eq!(result, Some(Ok(())));
        assert_eq!(server.hits(POST, "/api/leaves/5/approve"), 1);
        assert_eq!(server.hits(GET, "/api/leaves/pending"), 0);
        assert_eq!(server.hits(GET, "/api/leaves/balance/all"), 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn balances_for_a_deselected_year_are_dropped() {
        let server = MockServer::start_async().await;
        mock_balances(&server);

        let runtime = create_runtime();
        let vm = view_model(&server);
        vm.year.set(2023);
        vm.show_balances.set(true);
        let (result, ()) = futures::join!(vm.load_balances(), async { vm.year.set(2024) });

        assert_eq!(result, Ok(()));
        assert!(vm.balances.get_untracked().is_empty());
        let sent = server.received(GET, "/api/leaves/balance/all");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].query.as_deref(), Some("year=2023"));

        vm.load_balances().await.unwrap();
        assert_eq!(vm.balances.get_untracked().len(), 1);
        assert!(!vm.balances_loading.get_untracked());
        runtime.dispose();
    }
}
