use crate::models::{Approval, LogEntry, LogLevel, Priority, Report, ReportStatus};

pub fn pending_approvals() -> Vec<Approval> {
    let approval = |id: &str,
                    client: &str,
                    value: &str,
                    reason: &str,
                    owner: &str,
                    priority,
                    category: &str,
                    supplier: &str,
                    deadline: &str,
                    submitted_at: &str,
                    description: &str| Approval {
        id: id.to_string(),
        client: client.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
        owner: owner.to_string(),
        priority,
        category: category.to_string(),
        supplier: supplier.to_string(),
        deadline: deadline.to_string(),
        submitted_at: submitted_at.to_string(),
        description: description.to_string(),
        decision: None,
    };

    vec![
        approval(
            "RCS-2024-0892",
            "Energia Verde Lda",
            "€2.450.000",
            "Excede limite de €2M",
            "João Silva",
            Priority::High,
            "Energia Solar",
            "EnerTech Solutions",
            "2024-01-26",
            "2024-01-24 14:30",
            "Solicitação para instalação de sistema solar fotovoltaico de 1.5MW para complexo industrial.",
        ),
        approval(
            "RCS-2024-0889",
            "Industrial Power Corp",
            "€1.200.000",
            "Requisitos complexos de fornecedor",
            "Maria Santos",
            Priority::Medium,
            "Energia",
            "PowerGen Systems",
            "2024-01-25",
            "2024-01-23 16:45",
            "Aquisição de sistema de backup de energia com geradores e UPS para datacenter.",
        ),
        approval(
            "RCS-2024-0887",
            "Energy Solutions Ltd",
            "€3.100.000",
            "Excede limite de €2M",
            "Carlos Mendes",
            Priority::High,
            "Energia Solar",
            "EnerTech Solutions",
            "2024-01-25",
            "2024-01-22 10:15",
            "Projeto de parque solar de 2.5MW com integração à rede elétrica nacional.",
        ),
        approval(
            "RCS-2024-0885",
            "TechCorp International",
            "€850.000",
            "Novo fornecedor não validado",
            "Ana Costa",
            Priority::Medium,
            "Infraestrutura TI",
            "TechFlow Innovations",
            "2024-01-27",
            "2024-01-23 09:20",
            "Upgrade completo da infraestrutura de TI incluindo servidores e storage.",
        ),
    ]
}

pub fn system_logs() -> Vec<LogEntry> {
    let entry = |id: &str,
                 timestamp: &str,
                 level,
                 category: &str,
                 user: &str,
                 action: &str,
                 details: &str,
                 ip: &str,
                 duration: &str| LogEntry {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        level,
        category: category.to_string(),
        user: user.to_string(),
        action: action.to_string(),
        details: details.to_string(),
        ip: ip.to_string(),
        duration: duration.to_string(),
    };

    vec![
        entry(
            "LOG-001",
            "2024-01-24 15:30:22",
            LogLevel::Info,
            "Sistema",
            "Sistema IA",
            "Processamento de Cotação",
            "Cotação RCS-2024-0892 processada automaticamente com sucesso",
            "192.168.1.100",
            "2.3s",
        ),
        entry(
            "LOG-002",
            "2024-01-24 15:28:15",
            LogLevel::Warning,
            "Aprovação",
            "João Silva",
            "Cotação Pendente",
            "Cotação RCS-2024-0892 enviada para aprovação manual - Excede limite de €2M",
            "192.168.1.105",
            "0.8s",
        ),
        entry(
            "LOG-003",
            "2024-01-24 15:25:10",
            LogLevel::Success,
            "Fornecedor",
            "Maria Santos",
            "Validação Concluída",
            "Nova validação de fornecedor concluída: TechFlow Solutions",
            "192.168.1.102",
            "15.2s",
        ),
        entry(
            "LOG-004",
            "2024-01-24 15:20:45",
            LogLevel::Error,
            "Sistema",
            "Sistema IA",
            "Erro de Processamento",
            "Falha na conexão com API do fornecedor EnerTech - Timeout após 30s",
            "192.168.1.100",
            "30.0s",
        ),
        entry(
            "LOG-005",
            "2024-01-24 15:18:30",
            LogLevel::Info,
            "Usuário",
            "Carlos Mendes",
            "Login",
            "Usuário logou no sistema com sucesso",
            "192.168.1.108",
            "1.1s",
        ),
        entry(
            "LOG-006",
            "2024-01-24 15:15:22",
            LogLevel::Info,
            "Sistema",
            "Sistema IA",
            "Backup Automático",
            "Backup diário dos dados concluído com sucesso - 2.4GB arquivados",
            "192.168.1.100",
            "45.7s",
        ),
    ]
}

pub fn generated_reports() -> Vec<Report> {
    let report = |id: &str,
                  title: &str,
                  kind: &str,
                  period: &str,
                  status,
                  size: &str,
                  format: &str,
                  generated_at: &str,
                  author: &str,
                  downloads,
                  description: &str| Report {
        id: id.to_string(),
        title: title.to_string(),
        kind: kind.to_string(),
        period: period.to_string(),
        status,
        size: size.to_string(),
        format: format.to_string(),
        generated_at: generated_at.to_string(),
        author: author.to_string(),
        downloads,
        description: description.to_string(),
    };

    vec![
        report(
            "REL-001",
            "Relatório Mensal de Cotações",
            "Cotações",
            "Janeiro 2024",
            ReportStatus::Completed,
            "2.4 MB",
            "PDF",
            "2024-01-24 14:30",
            "Sistema Automático",
            15,
            "Análise completa das cotações processadas durante o mês de Janeiro.",
        ),
        report(
            "REL-002",
            "Performance de Fornecedores Q1",
            "Fornecedores",
            "Q1 2024",
            ReportStatus::Processing,
            "1.8 MB",
            "Excel",
            "2024-01-24 12:15",
            "Maria Santos",
            8,
            "Avaliação detalhada da performance dos fornecedores no primeiro trimestre.",
        ),
        report(
            "REL-003",
            "Análise de Custos de Procurement",
            "Financeiro",
            "2023",
            ReportStatus::Completed,
            "3.2 MB",
            "PDF",
            "2024-01-20 16:45",
            "Carlos Mendes",
            23,
            "Relatório anual de análise de custos e economia obtida através do sistema.",
        ),
        report(
            "REL-004",
            "Métricas de IA e Automação",
            "Sistema",
            "Janeiro 2024",
            ReportStatus::Completed,
            "1.5 MB",
            "PDF",
            "2024-01-22 10:30",
            "Sistema Automático",
            12,
            "Performance da inteligência artificial e índices de automação do sistema.",
        ),
        report(
            "REL-005",
            "Auditoria de Aprovações",
            "Aprovações",
            "Dezembro 2023",
            ReportStatus::Completed,
            "2.1 MB",
            "Excel",
            "2024-01-15 09:20",
            "João Silva",
            6,
            "Auditoria completa das aprovações manuais e motivos de escalonamento.",
        ),
    ]
}
