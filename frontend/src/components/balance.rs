use crate::api::{BalanceEntry, BalanceReport, LeaveType};
use leptos::*;

/// Rows in display order: the known leave types first, then anything else the
/// service reports.
pub fn balance_rows(report: &BalanceReport) -> Vec<(String, BalanceEntry)> {
    let mut rows: Vec<(String, BalanceEntry)> = LeaveType::ALL
        .iter()
        .filter_map(|kind| {
            report
                .balances
                .get(kind.as_str())
                .map(|entry| (kind.as_str().to_string(), *entry))
        })
        .collect();
    rows.extend(
        report
            .balances
            .iter()
            .filter(|(kind, _)| kind.parse::<LeaveType>().is_err())
            .map(|(kind, entry)| (kind.clone(), *entry)),
    );
    rows
}

#[component]
pub fn BalanceTable(report: BalanceReport) -> impl IntoView {
    let rows = balance_rows(&report);
    view! {
        <table class="min-w-full divide-y divide-border text-sm">
            <thead class="bg-surface-muted">
                <tr>
                    <th class="px-4 py-2 text-left">"Type"</th>
                    <th class="px-4 py-2 text-right">"Allowed"</th>
                    <th class="px-4 py-2 text-right">"Taken"</th>
                    <th class="px-4 py-2 text-right">"Remaining"</th>
                </tr>
            </thead>
            <tbody class="divide-y divide-border">
                {rows
                    .into_iter()
                    .map(|(kind, entry)| {
                        view! {
                            <tr>
                                <td class="px-4 py-2">{kind}</td>
                                <td class="px-4 py-2 text-right">{entry.allowed}</td>
                                <td class="px-4 py-2 text-right">{entry.taken}</td>
                                <td class="px-4 py-2 text-right font-medium">{entry.remaining}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// One block per employee, as listed by `/leaves/balance/all`.
#[component]
pub fn TeamBalances(reports: Vec<BalanceReport>) -> impl IntoView {
    reports
        .into_iter()
        .map(|report| {
            let heading = format!("{} ({})", report.name, report.year);
            view! {
                <section class="mb-4">
                    <h4 class="text-sm font-semibold text-fg mb-1">{heading}</h4>
                    <BalanceTable report=report/>
                </section>
            }
        })
        .collect_view()
}
