use crate::models::{
    AdminConnector, AdminUser, AlertLevel, CategoryShare, HealthStatus, Role, SystemAlert,
    SystemStats, UsagePoint,
};

pub fn system_stats() -> SystemStats {
    SystemStats {
        total_users: 1_247,
        active_users: 892,
        total_queries: 45_678,
        avg_response_time: "1.2s",
        uptime: "99.8%",
        data_processed: "2.4TB",
    }
}

pub fn usage_data() -> Vec<UsagePoint> {
    [
        ("Jan", 2_400, 240, 180),
        ("Fev", 1_398, 221, 220),
        ("Mar", 9_800, 289, 290),
        ("Abr", 3_908, 300, 340),
        ("Mai", 4_800, 310, 380),
        ("Jun", 3_800, 320, 420),
    ]
    .into_iter()
    .map(|(month, queries, users, data_processed)| UsagePoint {
        month,
        queries,
        users,
        data_processed,
    })
    .collect()
}

pub fn role_shares() -> Vec<CategoryShare> {
    vec![
        CategoryShare { name: "Analistas", value: 60, color: "#3B82F6" },
        CategoryShare { name: "Gestores", value: 25, color: "#22C55E" },
        CategoryShare { name: "Administradores", value: 15, color: "#F59E0B" },
    ]
}

pub fn admin_users() -> Vec<AdminUser> {
    vec![
        AdminUser {
            id: 1,
            name: "Ana Costa",
            email: "ana@empresa.pt",
            role: Role::Analyst,
            status: HealthStatus::Active,
            last_login: "2 min atrás",
            queries: 145,
        },
        AdminUser {
            id: 2,
            name: "Miguel Santos",
            email: "miguel@empresa.pt",
            role: Role::Manager,
            status: HealthStatus::Active,
            last_login: "1h atrás",
            queries: 89,
        },
        AdminUser {
            id: 3,
            name: "Carlos Ferreira",
            email: "carlos@empresa.pt",
            role: Role::Admin,
            status: HealthStatus::Active,
            last_login: "3h atrás",
            queries: 234,
        },
        AdminUser {
            id: 4,
            name: "Sofia Oliveira",
            email: "sofia@empresa.pt",
            role: Role::Analyst,
            status: HealthStatus::Inactive,
            last_login: "2d atrás",
            queries: 67,
        },
        AdminUser {
            id: 5,
            name: "João Silva",
            email: "joao@empresa.pt",
            role: Role::Manager,
            status: HealthStatus::Active,
            last_login: "30min atrás",
            queries: 123,
        },
    ]
}

pub fn admin_connectors() -> Vec<AdminConnector> {
    vec![
        AdminConnector {
            id: 1,
            name: "Primavera ERP",
            kind: "Database",
            status: HealthStatus::Connected,
            last_sync: "5min atrás",
            records: "15.4K",
        },
        AdminConnector {
            id: 2,
            name: "GLPI",
            kind: "API",
            status: HealthStatus::Connected,
            last_sync: "2min atrás",
            records: "8.9K",
        },
        AdminConnector {
            id: 3,
            name: "DocuWare",
            kind: "Document System",
            status: HealthStatus::Warning,
            last_sync: "1h atrás",
            records: "45.1K",
        },
        AdminConnector {
            id: 4,
            name: "Analytics DB",
            kind: "Data Warehouse",
            status: HealthStatus::Connected,
            last_sync: "1min atrás",
            records: "128.9K",
        },
        AdminConnector {
            id: 5,
            name: "SharePoint",
            kind: "Cloud Storage",
            status: HealthStatus::Error,
            last_sync: "6h atrás",
            records: "0",
        },
    ]
}

pub fn system_alerts() -> Vec<SystemAlert> {
    vec![
        SystemAlert {
            id: 1,
            level: AlertLevel::Warning,
            title: "Alto uso de CPU no servidor de análise",
            time: "5min atrás",
        },
        SystemAlert {
            id: 2,
            level: AlertLevel::Error,
            title: "Falha na conexão com SharePoint",
            time: "1h atrás",
        },
        SystemAlert {
            id: 3,
            level: AlertLevel::Info,
            title: "Backup diário concluído com sucesso",
            time: "2h atrás",
        },
        SystemAlert {
            id: 4,
            level: AlertLevel::Warning,
            title: "Limite de consultas quase atingido",
            time: "3h atrás",
        },
    ]
}

/// Resource gauges on the system tab, as percentages.
pub fn resource_usage() -> [(&'static str, u8); 3] {
    [("CPU", 45), ("Memória", 72), ("Armazenamento", 38)]
}
