use crate::models::{Product, Role};

pub const DEMO_PASSWORD: &str = "demo123";

#[derive(Clone, Debug, PartialEq)]
pub struct DemoCredential {
    pub email: &'static str,
    pub password: &'static str,
    pub name: &'static str,
    pub role: Role,
    pub description: &'static str,
}

static SMARTBI_CREDENTIALS: [DemoCredential; 3] = [
    DemoCredential {
        email: "analista@smartbi.pt",
        password: DEMO_PASSWORD,
        name: "Ana Costa",
        role: Role::Analyst,
        description: "Consultas e análises de dados empresariais",
    },
    DemoCredential {
        email: "gestor@smartbi.pt",
        password: DEMO_PASSWORD,
        name: "Miguel Santos",
        role: Role::Manager,
        description: "Gestão e supervisão de análises",
    },
    DemoCredential {
        email: "admin@smartbi.pt",
        password: DEMO_PASSWORD,
        name: "Carlos Ferreira",
        role: Role::Admin,
        description: "Configuração completa do sistema",
    },
];

static SMARTQUOTE_CREDENTIALS: [DemoCredential; 2] = [
    DemoCredential {
        email: "usuario@rcs.pt",
        password: DEMO_PASSWORD,
        name: "Utilizador RCS",
        role: Role::Analyst,
        description: "Portal do Cliente - Pesquisa de produtos e cotações",
    },
    DemoCredential {
        email: "admin@rcs.pt",
        password: DEMO_PASSWORD,
        name: "Administrador RCS",
        role: Role::Admin,
        description: "Painel Administrativo - Gestão completa do sistema",
    },
];

pub fn demo_credentials(product: Product) -> &'static [DemoCredential] {
    match product {
        Product::SmartBi => &SMARTBI_CREDENTIALS,
        Product::SmartQuote => &SMARTQUOTE_CREDENTIALS,
    }
}

pub fn login_features(product: Product) -> [&'static str; 3] {
    match product {
        Product::SmartBi => [
            "Consultas em Linguagem Natural",
            "Conexão Segura com Múltiplas Fontes",
            "Insights Automáticos com IA",
        ],
        Product::SmartQuote => [
            "Processamento Automático com IA",
            "Gestão Inteligente de Fornecedores",
            "Fluxos de Aprovação Configuráveis",
        ],
    }
}
