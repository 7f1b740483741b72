use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Product {
    SmartBi,
    SmartQuote,
}

impl Product {
    pub fn storage_key(self) -> &'static str {
        match self {
            Self::SmartBi => "smartbi_auth",
            Self::SmartQuote => "smartquote_auth",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::SmartBi => "SmartBI Assistant",
            Self::SmartQuote => "SmartQuote RCS",
        }
    }

    pub fn tagline(self) -> &'static str {
        match self {
            Self::SmartBi => {
                "Assistente inteligente de Business Intelligence para análise e consulta de dados empresariais com IA."
            }
            Self::SmartQuote => {
                "Plataforma inteligente de Cotações com IA para automação completa de procurement e gestão de fornecedores."
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Analyst,
    Manager,
    Admin,
}

impl Role {
    pub fn label(self, product: Product) -> &'static str {
        match (self, product) {
            (Self::Analyst, Product::SmartQuote) => "Usuário",
            (Self::Analyst, Product::SmartBi) => "Analista",
            (Self::Manager, _) => "Gestor",
            (Self::Admin, _) => "Administrador",
        }
    }

    /// Managers and admins may configure connectors.
    pub fn can_manage_connectors(self) -> bool {
        matches!(self, Self::Manager | Self::Admin)
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Chart,
    Table,
}

impl ResultKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chart => "chart",
            Self::Table => "table",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct BarPoint {
    pub name: String,
    pub value: u32,
    pub trend: String,
}

impl BarPoint {
    pub fn is_rising(&self) -> bool {
        self.trend.starts_with('+')
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LinePoint {
    pub month: String,
    pub value: u32,
    pub satisfaction: f32,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ResultPayload {
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Bar {
        points: Vec<BarPoint>,
    },
    Line {
        points: Vec<LinePoint>,
    },
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QueryResult {
    pub id: String,
    pub query: String,
    pub timestamp_ms: i64,
    pub user: String,
    pub data_source: String,
    pub kind: ResultKind,
    pub payload: ResultPayload,
    #[serde(default)]
    pub insights: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SuggestedQuery {
    pub text: &'static str,
    pub source: &'static str,
    pub complexity: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DataSourceSummary {
    pub name: &'static str,
    pub status: &'static str,
    pub count: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConnectorStatus {
    Connected,
    Disconnected,
    Error,
    Configuring,
}

impl ConnectorStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "Conectado",
            Self::Disconnected => "Desconectado",
            Self::Error => "Erro",
            Self::Configuring => "Configurando",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Connected => "bg-green-100 border-green-200 text-green-800",
            Self::Disconnected => "bg-gray-100 border-gray-200 text-gray-800",
            Self::Error => "bg-red-100 border-red-200 text-red-800",
            Self::Configuring => "bg-blue-100 border-blue-200 text-blue-800",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Connector {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub status: ConnectorStatus,
    pub last_sync_ms: i64,
    pub record_count: String,
    pub description: String,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    pub is_active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorTemplate {
    pub name: &'static str,
    pub kind: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Trend,
    Anomaly,
    Opportunity,
    Performance,
}

impl InsightKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Trend => "Tendência",
            Self::Anomaly => "Anomalia",
            Self::Opportunity => "Oportunidade",
            Self::Performance => "Performance",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "Alta",
            Self::Medium => "Média",
            Self::Low => "Baixa",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::High => "bg-red-500 text-white",
            Self::Medium => "bg-yellow-500 text-white",
            Self::Low => "bg-green-500 text-white",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Insight {
    pub id: u32,
    pub kind: InsightKind,
    pub priority: Priority,
    pub title: String,
    pub description: String,
    pub impact: String,
    pub confidence: u8,
    pub category: String,
    pub data_source: String,
    pub created_at_ms: i64,
    /// Ordered label/value pairs shown in the expanded card.
    #[serde(default)]
    pub metrics: Vec<(String, String)>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub month: &'static str,
    pub tickets: u32,
    pub sales: u32,
    pub docs: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryShare {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportFormat {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
    Completed,
    Processing,
    Failed,
}

impl ExportStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "Concluído",
            Self::Processing => "Processando",
            Self::Failed => "Falhou",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ExportJob {
    pub id: u32,
    pub name: String,
    pub format: String,
    pub status: ExportStatus,
    pub created_at_ms: i64,
    pub size: String,
    pub downloads: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SystemStats {
    pub total_users: u32,
    pub active_users: u32,
    pub total_queries: u32,
    pub avg_response_time: &'static str,
    pub uptime: &'static str,
    pub data_processed: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct UsagePoint {
    pub month: &'static str,
    pub queries: u32,
    pub users: u32,
    pub data_processed: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthStatus {
    Active,
    Inactive,
    Connected,
    Warning,
    Error,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Ativo",
            Self::Inactive => "Inativo",
            Self::Connected => "Conectado",
            Self::Warning => "Aviso",
            Self::Error => "Erro",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Active | Self::Connected => "bg-green-100 text-green-800 border-green-200",
            Self::Warning => "bg-yellow-100 text-yellow-800 border-yellow-200",
            Self::Inactive | Self::Error => "bg-red-100 text-red-800 border-red-200",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminUser {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub status: HealthStatus,
    pub last_login: &'static str,
    pub queries: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AdminConnector {
    pub id: u32,
    pub name: &'static str,
    pub kind: &'static str,
    pub status: HealthStatus,
    pub last_sync: &'static str,
    pub records: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SystemAlert {
    pub id: u32,
    pub level: AlertLevel,
    pub title: &'static str,
    pub time: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Rejected,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Approval {
    pub id: String,
    pub client: String,
    pub value: String,
    pub reason: String,
    pub owner: String,
    pub priority: Priority,
    pub category: String,
    pub supplier: String,
    pub deadline: String,
    pub submitted_at: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ReportStatus {
    Completed,
    Processing,
    Error,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [Self::Completed, Self::Processing, Self::Error];

    /// Filter value and display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "Concluído",
            Self::Processing => "Em Processamento",
            Self::Error => "Erro",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Completed => "bg-green-600 text-white",
            Self::Processing => "bg-blue-600 text-white",
            Self::Error => "bg-red-600 text-white",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub period: String,
    pub status: ReportStatus,
    pub size: String,
    pub format: String,
    pub generated_at: String,
    pub author: String,
    pub downloads: u32,
    pub description: String,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Success,
    Info,
}

impl LogLevel {
    pub const ALL: [LogLevel; 4] = [Self::Error, Self::Warning, Self::Success, Self::Info];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Error => "Erro",
            Self::Warning => "Aviso",
            Self::Success => "Sucesso",
            Self::Info => "Info",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Error => "bg-red-600 text-white",
            Self::Warning => "bg-orange-600 text-white",
            Self::Success => "bg-green-600 text-white",
            Self::Info => "bg-blue-600 text-white",
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: String,
    pub timestamp: String,
    pub level: LogLevel,
    pub category: String,
    pub user: String,
    pub action: String,
    pub details: String,
    pub ip: String,
    pub duration: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn role_serializes_lowercase() {
        let user = User {
            email: "gestor@smartbi.pt".into(),
            name: "Miguel Santos".into(),
            role: Role::Manager,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            json!({"email": "gestor@smartbi.pt", "name": "Miguel Santos", "role": "manager"})
        );
    }

    #[test]
    fn role_labels_depend_on_product() {
        assert_eq!(Role::Analyst.label(Product::SmartBi), "Analista");
        assert_eq!(Role::Analyst.label(Product::SmartQuote), "Usuário");
        assert_eq!(Role::Admin.label(Product::SmartQuote), "Administrador");
        assert!(Role::Manager.can_manage_connectors());
        assert!(!Role::Analyst.can_manage_connectors());
    }

    #[test]
    fn payload_is_tagged_by_shape() {
        let payload = ResultPayload::Bar {
            points: vec![BarPoint {
                name: "Hardware".into(),
                value: 145,
                trend: "+12%".into(),
            }],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["shape"], "bar");
        assert_eq!(value["points"][0]["value"], 145);
    }

    #[test]
    fn priority_parses_filter_values() {
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("all"), None);
    }
}
