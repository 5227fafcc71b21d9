//! # Relatório — Perguntas sobre a Família de Referência
//!
//! Este módulo é o **chamador externo** das regras: monta perguntas em
//! linguagem natural, avalia cada uma contra o store e formata o
//! resultado. O core não sabe nada sobre texto ou saída.
//!
//! ## Formatos
//!
//! ```text
//! Text:  Are Adam and Ben cousins? true
//! Json:  [{ "question": "Are Adam and Ben cousins?", "relation": "cousin", ... }]
//! ```

use serde::Serialize;

use crate::config::ReportFormat;
use crate::core::FamilyStore;
use crate::inference::{KinshipRules, Relation};

/// Uma pergunta avaliada.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Check {
    /// Pergunta em linguagem natural, terminada em `?`.
    pub question: String,
    /// Regra avaliada. `None` para consultas diretas de casamento.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    /// Resposta calculada.
    pub answer: bool,
    /// Resposta esperada para a família de referência.
    pub expected: bool,
}

impl Check {
    /// Avalia `relation` de `x` para `y`.
    pub fn relation(store: &FamilyStore, relation: Relation, x: &str, y: &str, expected: bool) -> Self {
        Self {
            question: format!("Are {} and {} {}?", x, y, relation.label()),
            relation: Some(relation),
            answer: KinshipRules::holds(store, relation, x, y),
            expected,
        }
    }

    /// Consulta direta: `b` está entre os cônjuges de `a`?
    pub fn married(store: &FamilyStore, a: &str, b: &str, expected: bool) -> Self {
        Self {
            question: format!("Are {} and {} married?", a, b),
            relation: None,
            answer: store.is_married(a, b),
            expected,
        }
    }

    /// Ambos `a` e `b` são pais (estendidos) de `child`?
    pub fn both_parents(store: &FamilyStore, a: &str, b: &str, child: &str, expected: bool) -> Self {
        Self {
            question: format!("Are {} and {} parents of {}?", a, b, child),
            relation: Some(Relation::Parent),
            answer: KinshipRules::is_parent(store, a, child)
                && KinshipRules::is_parent(store, b, child),
            expected,
        }
    }

    pub fn passed(&self) -> bool {
        self.answer == self.expected
    }
}

/// As perguntas de referência sobre [`seed::family_tree`](crate::seed::family_tree).
pub fn reference_checks(store: &FamilyStore) -> Vec<Check> {
    use Relation::*;

    vec![
        // Validações principais
        Check::relation(store, Cousin, "Liz", "Rebecca", false),
        Check::relation(store, Brother, "Oscar", "Nancy", false),
        Check::both_parents(store, "Helen", "Bob", "Cecil", true),
        Check::relation(store, Cousin, "Kate", "Nancy", false),
        Check::relation(store, Cousin, "Felix", "Liz", false),
        Check::relation(store, Sister, "Iris", "Helen", false),
        Check::relation(store, Sibling, "Edward", "Quinn", true),
        Check::relation(store, Cousin, "Edward", "Quinn", false),
        // Casamentos
        Check::married(store, "Bob", "Helen", true),
        Check::married(store, "Dennis", "Pattie", true),
        Check::married(store, "Gigi", "Martin", true),
        // Casos extras
        Check::relation(store, Sibling, "Dennis", "Cecil", false),
        Check::relation(store, Parent, "Cecil", "Dennis", true),
        Check::relation(store, Sibling, "Gigi", "Martin", false),
        Check::relation(store, Sister, "Kate", "Liz", false),
        Check::relation(store, Sibling, "Jane", "Iris", false),
        Check::relation(store, Parent, "Jane", "Kate", true),
        // Primos confirmados
        Check::relation(store, Sibling, "John", "Mary", true),
        Check::relation(store, Cousin, "Adam", "Ben", true),
        Check::relation(store, Cousin, "Adam", "Mary", false),
        // Irmãos por padrasto (Bob ♥ Helen)
        Check::relation(store, Sibling, "Cecil", "Iris", true),
    ]
}

/// Renderiza as perguntas no formato pedido.
///
/// Divergências entre resposta e esperado são registradas em `warn`,
/// mas não alteram a saída.
pub fn render(checks: &[Check], format: ReportFormat) -> serde_json::Result<String> {
    for check in checks.iter().filter(|c| !c.passed()) {
        tracing::warn!(
            question = %check.question,
            answer = check.answer,
            expected = check.expected,
            "resposta divergente do esperado"
        );
    }

    match format {
        ReportFormat::Text => Ok(checks
            .iter()
            .map(|c| format!("{} {}", c.question, c.answer))
            .collect::<Vec<_>>()
            .join("\n")),
        ReportFormat::Json => serde_json::to_string_pretty(checks),
    }
}
