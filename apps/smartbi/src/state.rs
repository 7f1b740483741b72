use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppResult;
use crate::fixtures::connectors::sample_connectors;
use crate::fixtures::insights::sample_insights;
use crate::fixtures::smartquote::{generated_reports, pending_approvals, system_logs};
use crate::models::{
    Approval, Connector, ConnectorStatus, Decision, Insight, InsightKind, LogEntry, Priority,
    Product, QueryResult, Report, Role, User,
};
use crate::services::export::{validate_export, ExportRequest};
use crate::services::format::{leading_count, now_ms};

pub type AppSignal = Signal<AppState>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Query,
    History,
    Connectors,
    Insights,
    Export,
    Admin,
}

impl Tab {
    const ALL: [Tab; 6] = [
        Tab::Query,
        Tab::History,
        Tab::Connectors,
        Tab::Insights,
        Tab::Export,
        Tab::Admin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Query => "Consultas",
            Self::History => "Histórico",
            Self::Connectors => "Conectores",
            Self::Insights => "Insights",
            Self::Export => "Exportar",
            Self::Admin => "Administração",
        }
    }

    pub fn visible_for(role: Role) -> Vec<Tab> {
        Self::ALL
            .into_iter()
            .filter(|tab| *tab != Tab::Admin || role.is_admin())
            .collect()
    }

    /// The admin tab falls back to the query view for everyone else.
    pub fn resolve(self, role: Role) -> Tab {
        if self == Tab::Admin && !role.is_admin() {
            Tab::Query
        } else {
            self
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn root_class(self) -> &'static str {
        match self {
            Self::Light => "min-h-screen bg-slate-50 text-slate-900",
            Self::Dark => "dark min-h-screen bg-slate-950 text-slate-100",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<User>,
    pub is_restoring: bool,
    pub is_authenticating: bool,
}

impl SessionState {
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QueryState {
    pub is_processing: bool,
    pub current: Option<QueryResult>,
    /// Newest first.
    pub history: Vec<QueryResult>,
}

impl QueryState {
    pub fn record(&mut self, result: QueryResult) {
        self.history.insert(0, result.clone());
        self.current = Some(result);
        self.is_processing = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Recent,
    Oldest,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Oldest => "oldest",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "oldest" => Self::Oldest,
            _ => Self::Recent,
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HistoryFilter {
    pub search: String,
    /// `None` shows every data source.
    pub source: Option<String>,
    pub sort: SortOrder,
}

impl HistoryFilter {
    pub fn matches(&self, result: &QueryResult) -> bool {
        let needle = self.search.to_lowercase();
        result.query.to_lowercase().contains(&needle)
            && self
                .source
                .as_ref()
                .map_or(true, |source| &result.data_source == source)
    }

    pub fn apply<'a>(&self, history: &'a [QueryResult]) -> Vec<&'a QueryResult> {
        let mut visible: Vec<&QueryResult> = history.iter().filter(|r| self.matches(r)).collect();
        match self.sort {
            SortOrder::Recent => visible.sort_by(|a, b| b.timestamp_ms.cmp(&a.timestamp_ms)),
            SortOrder::Oldest => visible.sort_by_key(|r| r.timestamp_ms),
        }
        visible
    }
}

/// Distinct data sources in first-seen order.
pub fn distinct_sources(history: &[QueryResult]) -> Vec<String> {
    let mut sources: Vec<String> = Vec::new();
    for result in history {
        if !sources.contains(&result.data_source) {
            sources.push(result.data_source.clone());
        }
    }
    sources
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConnectorBoard {
    pub connectors: Vec<Connector>,
    pub show_picker: bool,
}

impl ConnectorBoard {
    /// Flips `is_active` and derives the status from it. Returns the new
    /// status, or `None` for an unknown id.
    pub fn toggle(&mut self, id: &str) -> Option<ConnectorStatus> {
        let connector = self.connectors.iter_mut().find(|c| c.id == id)?;
        connector.is_active = !connector.is_active;
        connector.status = if connector.is_active {
            ConnectorStatus::Connected
        } else {
            ConnectorStatus::Disconnected
        };
        Some(connector.status)
    }

    pub fn connected(&self) -> impl Iterator<Item = &Connector> {
        self.connectors
            .iter()
            .filter(|c| c.status == ConnectorStatus::Connected)
    }

    pub fn connected_count(&self) -> usize {
        self.connected().count()
    }

    pub fn error_count(&self) -> usize {
        self.connectors
            .iter()
            .filter(|c| c.status == ConnectorStatus::Error)
            .count()
    }

    pub fn total_records(&self) -> u64 {
        self.connected().map(|c| leading_count(&c.record_count)).sum()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InsightBoard {
    pub insights: Vec<Insight>,
    pub priority: Option<Priority>,
    pub expanded: Option<u32>,
}

impl InsightBoard {
    pub fn visible(&self) -> Vec<&Insight> {
        self.insights
            .iter()
            .filter(|insight| self.priority.map_or(true, |p| insight.priority == p))
            .collect()
    }

    pub fn toggle_expanded(&mut self, id: u32) {
        self.expanded = if self.expanded == Some(id) { None } else { Some(id) };
    }

    pub fn high_priority_count(&self) -> usize {
        self.insights
            .iter()
            .filter(|i| i.priority == Priority::High)
            .count()
    }

    pub fn opportunity_count(&self) -> usize {
        self.insights
            .iter()
            .filter(|i| i.kind == InsightKind::Opportunity)
            .count()
    }

    pub fn average_confidence(&self) -> u32 {
        if self.insights.is_empty() {
            return 0;
        }
        let total: u32 = self.insights.iter().map(|i| i.confidence as u32).sum();
        (total as f64 / self.insights.len() as f64).round() as u32
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExportDraft {
    pub selected: Vec<String>,
    pub format: Option<String>,
    pub name: String,
    pub description: String,
    pub schedule: bool,
    pub recipients: String,
}

impl ExportDraft {
    pub fn toggle_query(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    /// Selects every id, or clears the selection when all are already picked.
    pub fn toggle_all(&mut self, all_ids: &[String]) {
        if !all_ids.is_empty() && self.selected.len() == all_ids.len() {
            self.selected.clear();
        } else {
            self.selected = all_ids.to_vec();
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn submit(&mut self) -> AppResult<ExportRequest> {
        let request = validate_export(
            &self.selected,
            self.format.as_deref(),
            &self.name,
            &self.description,
            self.schedule.then_some(self.recipients.as_str()),
        )?;
        self.selected.clear();
        self.format = None;
        self.name.clear();
        self.description.clear();
        Ok(request)
    }
}

/// A record that can be narrowed by free text and two facets.
pub trait Searchable {
    fn haystacks(&self) -> [&str; 3];
    fn facets(&self) -> [&str; 2];
}

impl Searchable for Approval {
    fn haystacks(&self) -> [&str; 3] {
        [&self.client, &self.id, &self.supplier]
    }

    fn facets(&self) -> [&str; 2] {
        [self.priority.as_str(), &self.owner]
    }
}

impl Searchable for LogEntry {
    fn haystacks(&self) -> [&str; 3] {
        [&self.details, &self.user, &self.action]
    }

    fn facets(&self) -> [&str; 2] {
        [self.level.as_str(), &self.category]
    }
}

impl Searchable for Report {
    fn haystacks(&self) -> [&str; 3] {
        [&self.title, &self.description, &self.author]
    }

    fn facets(&self) -> [&str; 2] {
        [&self.kind, self.status.as_str()]
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RecordFilter {
    pub search: String,
    pub facets: [Option<String>; 2],
}

impl RecordFilter {
    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = record
            .haystacks()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle));

        text_match
            && self
                .facets
                .iter()
                .zip(record.facets())
                .all(|(wanted, actual)| wanted.as_deref().map_or(true, |w| w == actual))
    }

    pub fn apply<'a, T: Searchable>(&self, records: &'a [T]) -> Vec<&'a T> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    pub fn set_facet(&mut self, index: usize, value: Option<String>) {
        if let Some(slot) = self.facets.get_mut(index) {
            *slot = value;
        }
    }
}

/// Distinct facet values in first-seen order, for select options.
pub fn facet_values<T: Searchable>(records: &[T], index: usize) -> Vec<String> {
    let mut values: Vec<String> = Vec::new();
    for record in records {
        if let Some(value) = record.facets().get(index) {
            if !values.iter().any(|v| v == value) {
                values.push(value.to_string());
            }
        }
    }
    values
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuotePage {
    #[default]
    Approvals,
    Logs,
    Reports,
}

impl QuotePage {
    pub const ALL: [QuotePage; 3] = [QuotePage::Approvals, QuotePage::Logs, QuotePage::Reports];

    pub fn label(self) -> &'static str {
        match self {
            Self::Approvals => "Aprovações",
            Self::Logs => "Logs do Sistema",
            Self::Reports => "Relatórios",
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SmartQuoteState {
    pub page: QuotePage,
    pub approvals: Vec<Approval>,
    pub approval_filter: RecordFilter,
    pub logs: Vec<LogEntry>,
    pub log_filter: RecordFilter,
    pub reports: Vec<Report>,
    pub report_filter: RecordFilter,
}

impl SmartQuoteState {
    pub fn with_fixtures() -> Self {
        Self {
            approvals: pending_approvals(),
            logs: system_logs(),
            reports: generated_reports(),
            ..Self::default()
        }
    }

    /// Records the decision locally. Returns `false` for an unknown id.
    pub fn decide(&mut self, id: &str, decision: Decision) -> bool {
        match self.approvals.iter_mut().find(|a| a.id == id) {
            Some(approval) => {
                approval.decision = Some(decision);
                true
            }
            None => false,
        }
    }

    pub fn pending_count(&self) -> usize {
        self.approvals.iter().filter(|a| a.decision.is_none()).count()
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OperationState {
    pub last_message: Option<String>,
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub product: Product,
    pub theme: Theme,
    pub tab: Tab,
    pub session: SessionState,
    pub query: QueryState,
    pub history_filter: HistoryFilter,
    pub connectors: ConnectorBoard,
    pub insights: InsightBoard,
    pub export: ExportDraft,
    pub smartquote: SmartQuoteState,
    pub operation: OperationState,
}

impl AppState {
    pub fn new(product: Product) -> Self {
        Self::with_clock(product, now_ms())
    }

    pub fn with_clock(product: Product, now_ms: i64) -> Self {
        Self {
            product,
            theme: Theme::default(),
            tab: Tab::default(),
            session: SessionState {
                is_restoring: true,
                ..SessionState::default()
            },
            query: QueryState::default(),
            history_filter: HistoryFilter::default(),
            connectors: ConnectorBoard {
                connectors: sample_connectors(now_ms),
                show_picker: false,
            },
            insights: InsightBoard {
                insights: sample_insights(now_ms),
                ..InsightBoard::default()
            },
            export: ExportDraft::default(),
            smartquote: SmartQuoteState::with_fixtures(),
            operation: OperationState::default(),
        }
    }

    pub fn active_tab(&self) -> Tab {
        match self.session.role() {
            Some(role) => self.tab.resolve(role),
            None => Tab::Query,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    fn update(&self, f: impl FnOnce(&mut AppState)) {
        let mut state = self.state;
        f(&mut *state.write());
    }

    pub fn finish_restore(&self, user: Option<User>) {
        self.update(|state| {
            state.session.user = user;
            state.session.is_restoring = false;
        });
    }

    pub fn set_authenticating(&self, authenticating: bool) {
        self.update(|state| state.session.is_authenticating = authenticating);
    }

    pub fn login_succeeded(&self, user: User) {
        info!(email = %user.email, role = ?user.role, "login succeeded");
        self.update(|state| {
            state.session.user = Some(user);
            state.session.is_authenticating = false;
            state.tab = Tab::Query;
        });
    }

    /// Drops the user and every per-session list; the theme survives.
    pub fn logout(&self) {
        self.update(|state| {
            let theme = state.theme;
            *state = AppState::new(state.product);
            state.theme = theme;
            state.session.is_restoring = false;
        });
    }

    pub fn set_tab(&self, tab: Tab) {
        self.update(|state| state.tab = tab);
    }

    pub fn toggle_theme(&self) {
        self.update(|state| state.theme = state.theme.toggled());
    }

    pub fn begin_query(&self) {
        self.update(|state| state.query.is_processing = true);
    }

    pub fn finish_query(&self, result: QueryResult) {
        self.update(|state| state.query.record(result));
    }

    pub fn abort_query(&self) {
        self.update(|state| state.query.is_processing = false);
    }

    pub fn set_history_search(&self, search: String) {
        self.update(|state| state.history_filter.search = search);
    }

    pub fn set_history_source(&self, source: Option<String>) {
        self.update(|state| state.history_filter.source = source);
    }

    pub fn set_history_sort(&self, sort: SortOrder) {
        self.update(|state| state.history_filter.sort = sort);
    }

    pub fn toggle_connector(&self, id: &str) {
        self.update(|state| match state.connectors.toggle(id) {
            Some(status) => info!(connector = %id, status = ?status, "connector toggled"),
            None => tracing::warn!(connector = %id, "toggle for unknown connector"),
        });
    }

    pub fn set_connector_picker(&self, open: bool) {
        self.update(|state| state.connectors.show_picker = open);
    }

    pub fn set_insight_priority(&self, priority: Option<Priority>) {
        self.update(|state| state.insights.priority = priority);
    }

    pub fn toggle_insight(&self, id: u32) {
        self.update(|state| state.insights.toggle_expanded(id));
    }

    pub fn toggle_export_query(&self, id: &str) {
        self.update(|state| state.export.toggle_query(id));
    }

    pub fn toggle_all_export_queries(&self) {
        self.update(|state| {
            let ids: Vec<String> = state.query.history.iter().map(|q| q.id.clone()).collect();
            state.export.toggle_all(&ids);
        });
    }

    pub fn edit_export(&self, f: impl FnOnce(&mut ExportDraft)) {
        self.update(|state| f(&mut state.export));
    }

    pub fn submit_export(&self) -> AppResult<ExportRequest> {
        let mut state = self.state;
        let request = state.write().export.submit()?;
        info!(
            queries = request.query_ids.len(),
            format = %request.format,
            recipients = request.recipients.len(),
            "export created"
        );
        Ok(request)
    }

    pub fn set_quote_page(&self, page: QuotePage) {
        self.update(|state| state.smartquote.page = page);
    }

    pub fn edit_quote_filter(&self, page: QuotePage, f: impl FnOnce(&mut RecordFilter)) {
        self.update(|state| {
            let quote = &mut state.smartquote;
            let filter = match page {
                QuotePage::Approvals => &mut quote.approval_filter,
                QuotePage::Logs => &mut quote.log_filter,
                QuotePage::Reports => &mut quote.report_filter,
            };
            f(filter);
        });
    }

    pub fn decide_approval(&self, id: &str, decision: Decision) {
        self.update(|state| {
            if state.smartquote.decide(id, decision) {
                info!(approval = %id, decision = ?decision, "approval decided");
                let verb = match decision {
                    Decision::Approved => "aprovada",
                    Decision::Rejected => "rejeitada",
                };
                state.operation = OperationState {
                    last_message: Some(format!("Cotação {id} {verb}")),
                    ..OperationState::default()
                };
            }
        });
    }

    pub fn set_operation_success(&self, message: String) {
        self.update(|state| {
            state.operation.last_message = Some(message);
            state.operation.error = None;
            state.operation.context = None;
        });
    }

    pub fn set_operation_error(&self, context: impl Into<String>, message: String) {
        let context = context.into();
        self.update(|state| {
            state.operation.error = Some(message);
            state.operation.last_message = None;
            state.operation.context = Some(context);
        });
    }

    pub fn clear_operation_status(&self) {
        self.update(|state| state.operation = OperationState::default());
    }
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LogLevel, ReportStatus};
    use crate::services::auth::authenticate;
    use crate::services::query::build_result;

    const NOW: i64 = 1_706_100_000_000;

    fn history() -> Vec<QueryResult> {
        vec![
            build_result("Mostrar pedidos do Primavera", "Ana Costa", NOW - 3_000).unwrap(),
            build_result("tickets do GLPI por categoria", "Ana Costa", NOW - 1_000).unwrap(),
            build_result("Pedidos antigos do Primavera", "Ana Costa", NOW - 5_000).unwrap(),
            build_result("correlação de satisfação", "Ana Costa", NOW - 2_000).unwrap(),
        ]
    }

    #[test]
    fn admin_tab_only_for_admins() {
        assert!(Tab::visible_for(Role::Admin).contains(&Tab::Admin));
        assert!(!Tab::visible_for(Role::Manager).contains(&Tab::Admin));
        assert_eq!(Tab::visible_for(Role::Analyst).len(), 5);
        assert_eq!(Tab::Admin.resolve(Role::Analyst), Tab::Query);
        assert_eq!(Tab::Admin.resolve(Role::Admin), Tab::Admin);
    }

    #[test]
    fn active_tab_requires_a_session() {
        let mut state = AppState::with_clock(Product::SmartBi, NOW);
        state.tab = Tab::Admin;
        assert_eq!(state.active_tab(), Tab::Query);

        state.session.user =
            Some(authenticate(Product::SmartBi, "analista@smartbi.pt", "demo123").unwrap());
        assert_eq!(state.active_tab(), Tab::Query);

        state.session.user =
            Some(authenticate(Product::SmartBi, "admin@smartbi.pt", "demo123").unwrap());
        assert_eq!(state.active_tab(), Tab::Admin);
    }

    #[test]
    fn recording_a_query_prepends_and_sets_current() {
        let mut query = QueryState {
            is_processing: true,
            ..QueryState::default()
        };
        let first = build_result("a", "u", 1).unwrap();
        let second = build_result("b", "u", 2).unwrap();
        query.record(first.clone());
        query.record(second.clone());
        assert_eq!(query.history, vec![second.clone(), first]);
        assert_eq!(query.current, Some(second));
        assert!(!query.is_processing);
    }

    #[test]
    fn history_filter_by_source_returns_exact_subset() {
        let history = history();
        let filter = HistoryFilter {
            source: Some("Primavera ERP".into()),
            ..HistoryFilter::default()
        };
        let visible = filter.apply(&history);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.data_source == "Primavera ERP"));
    }

    #[test]
    fn history_search_is_case_insensitive_and_sorted() {
        let history = history();
        let mut filter = HistoryFilter {
            search: "PEDIDOS".into(),
            ..HistoryFilter::default()
        };
        let recent: Vec<_> = filter.apply(&history).iter().map(|r| r.timestamp_ms).collect();
        assert_eq!(recent, vec![NOW - 3_000, NOW - 5_000]);

        filter.sort = SortOrder::Oldest;
        filter.search.clear();
        let oldest: Vec<_> = filter.apply(&history).iter().map(|r| r.timestamp_ms).collect();
        assert_eq!(oldest, vec![NOW - 5_000, NOW - 3_000, NOW - 2_000, NOW - 1_000]);
    }

    #[test]
    fn distinct_sources_keep_first_seen_order() {
        assert_eq!(
            distinct_sources(&history()),
            vec!["Primavera ERP", "GLPI", "Analytics DB"]
        );
    }

    #[test]
    fn toggling_a_connector_flips_its_status_label() {
        let mut board = ConnectorBoard {
            connectors: sample_connectors(NOW),
            show_picker: false,
        };
        assert_eq!(board.connected_count(), 4);
        assert_eq!(board.total_records(), 15_423 + 8_901 + 45_123 + 128_990);

        assert_eq!(board.toggle("glpi"), Some(ConnectorStatus::Disconnected));
        let glpi = board.connectors.iter().find(|c| c.id == "glpi").unwrap();
        assert_eq!(glpi.status.label(), "Desconectado");
        assert!(!glpi.is_active);
        assert_eq!(board.connected_count(), 3);
        assert_eq!(board.total_records(), 15_423 + 45_123 + 128_990);

        assert_eq!(board.toggle("glpi"), Some(ConnectorStatus::Connected));
        let glpi = board.connectors.iter().find(|c| c.id == "glpi").unwrap();
        assert_eq!(glpi.status.label(), "Conectado");
    }

    #[test]
    fn toggling_an_errored_connector_connects_it() {
        let mut board = ConnectorBoard {
            connectors: sample_connectors(NOW),
            show_picker: false,
        };
        assert_eq!(board.error_count(), 1);
        assert_eq!(board.toggle("sql-server"), Some(ConnectorStatus::Connected));
        assert_eq!(board.error_count(), 0);
        // "Unknown" record counts contribute nothing.
        assert_eq!(board.total_records(), 15_423 + 8_901 + 45_123 + 128_990);
        assert_eq!(board.toggle("missing"), None);
    }

    #[test]
    fn insight_priority_filter_and_aggregates() {
        let mut board = InsightBoard {
            insights: sample_insights(NOW),
            ..InsightBoard::default()
        };
        assert_eq!(board.visible().len(), 4);
        board.priority = Some(Priority::Medium);
        let visible = board.visible();
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|i| i.priority == Priority::Medium));

        assert_eq!(board.high_priority_count(), 1);
        assert_eq!(board.opportunity_count(), 1);
        // (92 + 87 + 94 + 98) / 4 = 92.75
        assert_eq!(board.average_confidence(), 93);

        board.toggle_expanded(2);
        assert_eq!(board.expanded, Some(2));
        board.toggle_expanded(2);
        assert_eq!(board.expanded, None);
    }

    #[test]
    fn export_selection_and_submit() {
        let ids: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let mut draft = ExportDraft::default();
        draft.toggle_query("b");
        draft.toggle_query("a");
        draft.toggle_query("b");
        assert_eq!(draft.selected, vec!["a".to_string()]);

        draft.toggle_all(&ids);
        assert_eq!(draft.selected, ids);
        draft.toggle_all(&ids);
        assert!(draft.selected.is_empty());

        assert!(draft.submit().is_err());
        draft.toggle_query("c");
        assert!(draft.submit().is_err());

        draft.format = Some("json".into());
        draft.name = "Mensal".into();
        let request = draft.submit().unwrap();
        assert_eq!(request.query_ids, vec!["c".to_string()]);
        assert!(draft.selected.is_empty());
        assert!(draft.format.is_none());
        assert!(draft.name.is_empty());
    }

    #[test]
    fn export_recipients_only_when_scheduled() {
        let mut draft = ExportDraft {
            selected: vec!["a".into()],
            format: Some("csv".into()),
            recipients: "ana@empresa.pt".into(),
            ..ExportDraft::default()
        };
        assert!(draft.clone().submit().unwrap().recipients.is_empty());
        draft.schedule = true;
        assert_eq!(draft.submit().unwrap().recipients, vec!["ana@empresa.pt".to_string()]);
    }

    #[test]
    fn approval_filters_search_client_id_and_supplier() {
        let approvals = pending_approvals();
        let mut filter = RecordFilter::default();
        assert_eq!(filter.apply(&approvals).len(), 4);

        filter.search = "enertech".into();
        assert_eq!(filter.apply(&approvals).len(), 2);

        filter.search = "0885".into();
        let hits = filter.apply(&approvals);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].client, "TechCorp International");

        filter.search.clear();
        filter.set_facet(0, Some("high".into()));
        let high = filter.apply(&approvals);
        assert_eq!(high.len(), 2);
        assert!(high.iter().all(|a| a.priority == Priority::High));

        filter.set_facet(1, Some("Carlos Mendes".into()));
        assert_eq!(filter.apply(&approvals).len(), 1);
    }

    #[test]
    fn log_filters_by_level_and_category() {
        let logs = system_logs();
        let mut filter = RecordFilter::default();
        filter.set_facet(0, Some(LogLevel::Info.as_str().into()));
        assert_eq!(filter.apply(&logs).len(), 3);
        filter.set_facet(1, Some("Sistema".into()));
        assert_eq!(filter.apply(&logs).len(), 2);

        let mut search = RecordFilter {
            search: "backup".into(),
            ..RecordFilter::default()
        };
        assert_eq!(search.apply(&logs).len(), 1);
        search.search = "joão".into();
        assert_eq!(search.apply(&logs)[0].id, "LOG-002");
    }

    #[test]
    fn report_filters_by_kind_and_status() {
        let reports = generated_reports();
        let mut filter = RecordFilter::default();
        filter.set_facet(1, Some(ReportStatus::Completed.as_str().into()));
        assert_eq!(filter.apply(&reports).len(), 4);
        filter.set_facet(0, Some("Fornecedores".into()));
        assert!(filter.apply(&reports).is_empty());
        filter.set_facet(1, None);
        assert_eq!(filter.apply(&reports).len(), 1);

        let search = RecordFilter {
            search: "sistema automático".into(),
            ..RecordFilter::default()
        };
        assert_eq!(search.apply(&reports).len(), 2);
    }

    #[test]
    fn facet_values_are_distinct() {
        let approvals = pending_approvals();
        assert_eq!(facet_values(&approvals, 0), vec!["high", "medium"]);
        assert_eq!(facet_values(&approvals, 1).len(), 4);
        assert!(facet_values(&approvals, 5).is_empty());
    }

    #[test]
    fn approval_decisions_stay_local() {
        let mut quote = SmartQuoteState::with_fixtures();
        assert_eq!(quote.pending_count(), 4);
        assert!(quote.decide("RCS-2024-0889", Decision::Approved));
        assert!(!quote.decide("RCS-0000", Decision::Rejected));
        assert_eq!(quote.pending_count(), 3);
    }

    fn product_root() -> Element {
        let app_state = use_signal(|| AppState::with_clock(Product::SmartBi, NOW));
        use_context_provider(|| app_state);
        rsx! {}
    }

    /// Runs `f` against the live app state signal, the way event handlers do.
    fn with_actions<R>(f: impl FnOnce(AppActions, AppSignal) -> R) -> R {
        let mut dom = VirtualDom::new(product_root);
        dom.rebuild_in_place();
        dom.in_runtime(|| {
            let state = ScopeId::APP
                .consume_context::<AppSignal>()
                .expect("app state provided");
            f(AppActions { state }, state)
        })
    }

    #[test]
    fn login_selects_the_query_tab() {
        with_actions(|actions, state| {
            actions.finish_restore(None);
            actions.set_tab(Tab::Export);
            actions.set_authenticating(true);

            let user = authenticate(Product::SmartBi, "gestor@smartbi.pt", "demo123").unwrap();
            actions.login_succeeded(user);

            let snapshot = state.peek();
            assert_eq!(snapshot.tab, Tab::Query);
            assert_eq!(snapshot.active_tab(), Tab::Query);
            assert_eq!(snapshot.session.role(), Some(Role::Manager));
            assert!(!snapshot.session.is_authenticating);
            assert!(!snapshot.session.is_restoring);
        });
    }

    #[test]
    fn logout_resets_session_lists_but_keeps_theme() {
        with_actions(|actions, state| {
            let user = authenticate(Product::SmartBi, "admin@smartbi.pt", "demo123").unwrap();
            actions.finish_restore(Some(user));
            actions.toggle_theme();

            actions.begin_query();
            let result = build_result("Mostrar pedidos do Primavera", "Carlos", NOW).unwrap();
            let id = result.id.clone();
            actions.finish_query(result);
            actions.toggle_export_query(&id);
            actions.edit_export(|draft| draft.name = "Pedidos".into());
            actions.toggle_connector("glpi");
            actions.decide_approval("RCS-2024-0889", Decision::Approved);
            actions.set_tab(Tab::Admin);

            {
                let snapshot = state.peek();
                assert_eq!(snapshot.query.history.len(), 1);
                assert_eq!(snapshot.export.selected, vec![id.clone()]);
                assert_eq!(snapshot.connectors.connected_count(), 3);
                assert_eq!(snapshot.smartquote.pending_count(), 3);
                assert!(snapshot.operation.last_message.is_some());
            }

            actions.logout();

            let snapshot = state.peek();
            assert!(snapshot.session.user.is_none());
            assert!(!snapshot.session.is_restoring);
            assert_eq!(snapshot.theme, Theme::Dark);
            assert_eq!(snapshot.tab, Tab::Query);
            assert!(snapshot.query.history.is_empty());
            assert!(snapshot.query.current.is_none());
            assert!(snapshot.export.selected.is_empty());
            assert!(snapshot.export.name.is_empty());
            assert_eq!(snapshot.connectors.connected_count(), 4);
            assert_eq!(snapshot.smartquote.pending_count(), 4);
            assert!(snapshot.operation.last_message.is_none());
        });
    }

    #[test]
    fn processing_flag_clears_on_answer_and_on_abort() {
        with_actions(|actions, state| {
            actions.begin_query();
            assert!(state.peek().query.is_processing);
            let result = build_result("tickets do GLPI por categoria", "Ana", NOW).unwrap();
            actions.finish_query(result);
            assert!(!state.peek().query.is_processing);
            assert_eq!(state.peek().query.history.len(), 1);

            actions.begin_query();
            actions.abort_query();
            let snapshot = state.peek();
            assert!(!snapshot.query.is_processing);
            assert_eq!(snapshot.query.history.len(), 1);
        });
    }
}
