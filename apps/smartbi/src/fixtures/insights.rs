use crate::models::{CategoryShare, Insight, InsightKind, Priority, TrendPoint};

use super::{hours_ago, minutes_ago};

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(label, value)| (label.to_string(), value.to_string()))
        .collect()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub fn sample_insights(now_ms: i64) -> Vec<Insight> {
    vec![
        Insight {
            id: 1,
            kind: InsightKind::Trend,
            priority: Priority::High,
            title: "Aumento significativo em tickets de hardware".into(),
            description: "Tickets relacionados a hardware aumentaram 45% nos últimos 30 dias, principalmente devido a problemas de memória RAM.".into(),
            impact: "Alto".into(),
            confidence: 92,
            category: "ITSM".into(),
            data_source: "GLPI".into(),
            created_at_ms: minutes_ago(now_ms, 30),
            metrics: pairs(&[("Atual", "145"), ("Anterior", "100"), ("Variação", "+45%")]),
            recommendations: lines(&[
                "Verificar fornecedores de hardware atual",
                "Implementar monitoramento preventivo de memória",
                "Negociar contrato de manutenção expandido",
            ]),
        },
        Insight {
            id: 2,
            kind: InsightKind::Anomaly,
            priority: Priority::Medium,
            title: "Padrão incomum de vendas por região".into(),
            description: "Vendas na região Norte estão 20% abaixo da média histórica, enquanto Centro apresenta crescimento atípico de 35%.".into(),
            impact: "Médio".into(),
            confidence: 87,
            category: "Vendas".into(),
            data_source: "Primavera ERP".into(),
            created_at_ms: hours_ago(now_ms, 2),
            metrics: pairs(&[
                ("Norte", "€245K (-20%)"),
                ("Centro", "€380K (+35%)"),
                ("Sul", "€290K (+5%)"),
            ]),
            recommendations: lines(&[
                "Investigar mudanças de equipe na região Norte",
                "Analisar campanhas de marketing específicas do Centro",
                "Realocar recursos comerciais entre regiões",
            ]),
        },
        Insight {
            id: 3,
            kind: InsightKind::Opportunity,
            priority: Priority::Medium,
            title: "Oportunidade de otimização de aprovações".into(),
            description: "73% dos documentos são aprovados automaticamente após 5 dias de espera. Sugerimos implementar aprovação automática inteligente.".into(),
            impact: "Médio".into(),
            confidence: 94,
            category: "Processos".into(),
            data_source: "DocuWare".into(),
            created_at_ms: hours_ago(now_ms, 6),
            metrics: pairs(&[
                ("Auto-aprovados", "73%"),
                ("Espera média", "5.2 dias"),
                ("Poupança potencial", "32h/semana"),
            ]),
            recommendations: lines(&[
                "Implementar regras de auto-aprovação baseadas em valor",
                "Configurar alertas para documentos pendentes",
                "Criar dashboard de SLA para aprovações",
            ]),
        },
        Insight {
            id: 4,
            kind: InsightKind::Performance,
            priority: Priority::Low,
            title: "Performance consistente do sistema analytics".into(),
            description: "O sistema de analytics mantém performance estável com 99.2% de uptime e tempos de resposta médios de 1.8s.".into(),
            impact: "Baixo".into(),
            confidence: 98,
            category: "Infraestrutura".into(),
            data_source: "Analytics DB".into(),
            created_at_ms: hours_ago(now_ms, 12),
            metrics: pairs(&[
                ("Uptime", "99.2%"),
                ("Resposta média", "1.8s"),
                ("Taxa de erro", "0.1%"),
            ]),
            recommendations: lines(&[
                "Manter configurações atuais",
                "Planejar capacidade para próximo trimestre",
                "Documentar melhores práticas implementadas",
            ]),
        },
    ]
}

pub fn trending_data() -> Vec<TrendPoint> {
    vec![
        TrendPoint { month: "Out", tickets: 120, sales: 450, docs: 890 },
        TrendPoint { month: "Nov", tickets: 135, sales: 520, docs: 920 },
        TrendPoint { month: "Dez", tickets: 165, sales: 480, docs: 1_100 },
        TrendPoint { month: "Jan", tickets: 145, sales: 620, docs: 1_250 },
    ]
}

pub fn category_shares() -> Vec<CategoryShare> {
    vec![
        CategoryShare { name: "ITSM", value: 35, color: "#3B82F6" },
        CategoryShare { name: "Vendas", value: 25, color: "#22C55E" },
        CategoryShare { name: "Processos", value: 20, color: "#F59E0B" },
        CategoryShare { name: "Infraestrutura", value: 15, color: "#EF4444" },
        CategoryShare { name: "Outros", value: 5, color: "#8B5CF6" },
    ]
}
