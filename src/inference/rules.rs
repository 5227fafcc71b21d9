//! # Regras de Parentesco
//!
//! Implementação das cinco regras de parentesco aplicadas sobre os fatos
//! de um [FamilyStore].
//!
//! ## Pais Estendidos por Casamento
//!
//! O conjunto de pais de uma pessoa inclui os pais biológicos **e** os
//! cônjuges de cada pai biológico (padrasto/madrasta):
//!
//! ```text
//! pais(x) = ⋃ { {p} ∪ cônjuges(p) | p ∈ biológicos(x) }
//! ```
//!
//! Esse conjunto estendido vale para `Parent` e `Sibling` (e portanto
//! `Brother`/`Sister`). Duas pessoas podem ser irmãs sem nenhum pai
//! biológico em comum, apenas por um padrasto compartilhado.
//!
//! ## Primos
//!
//! A regra de primos é deliberadamente assimétrica:
//!
//! ```text
//! ∃ xp ∈ biológicos(x), yp ∈ biológicos(y): irmãos(xp, yp)
//! ```
//!
//! Os pais de x e y são apenas os **biológicos**, mas o teste de irmandade
//! entre eles usa a regra estendida por casamento.
//!
//! ## Auto-comparação
//!
//! Só `Sibling` rejeita `x == y`. As outras regras seguem a lógica de
//! conjuntos sem guarda especial.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{FamilyStore, Gender};

/// Tipo de relação derivável entre duas pessoas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    /// x é pai/mãe (ou padrasto/madrasta) de y. Direcional.
    Parent,
    /// x e y compartilham ao menos um pai estendido.
    Sibling,
    /// Irmãos, ambos `male`.
    Brother,
    /// Irmãs, ambas `female`.
    Sister,
    /// Pais biológicos de x e y são irmãos.
    Cousin,
}

impl Relation {
    /// Todas as relações, na ordem usada por [`KinshipRules::relations_between`].
    pub const ALL: [Relation; 5] = [
        Relation::Parent,
        Relation::Sibling,
        Relation::Brother,
        Relation::Sister,
        Relation::Cousin,
    ];

    /// Label legível, usado para formular perguntas no relatório.
    pub fn label(&self) -> &'static str {
        match self {
            Relation::Parent => "parent/child",
            Relation::Sibling => "siblings",
            Relation::Brother => "brothers",
            Relation::Sister => "sisters",
            Relation::Cousin => "cousins",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Avaliador de regras — struct sem estado, totalmente funcional.
///
/// Recebe o store por referência e nunca o altera, então consultas
/// concorrentes sobre um store já montado são seguras.
///
/// ## Uso
///
/// ```rust
/// let store = seed::family_tree();
/// assert!(KinshipRules::are_cousins(&store, "Adam", "Ben"));
/// ```
pub struct KinshipRules;

impl KinshipRules {
    /// Pais estendidos por casamento: biológicos mais seus cônjuges.
    pub fn all_parents_of(store: &FamilyStore, child: &str) -> BTreeSet<String> {
        let mut parents = BTreeSet::new();
        for parent in store.biological_parents_of(child) {
            parents.extend(store.spouses(&parent));
            parents.insert(parent);
        }
        parents
    }

    /// Verdadeiro se `x` é pai estendido de `z`. Padrastos contam.
    pub fn is_parent(store: &FamilyStore, x: &str, z: &str) -> bool {
        Self::all_parents_of(store, z).contains(x)
    }

    /// Verdadeiro se `x ≠ y` e os pais estendidos de ambos se intersectam.
    pub fn are_siblings(store: &FamilyStore, x: &str, y: &str) -> bool {
        if x == y {
            return false;
        }
        let x_parents = Self::all_parents_of(store, x);
        if x_parents.is_empty() {
            return false;
        }
        let y_parents = Self::all_parents_of(store, y);
        let shared = !x_parents.is_disjoint(&y_parents);
        tracing::trace!(x, y, shared, "regra: irmãos");
        shared
    }

    pub fn are_brothers(store: &FamilyStore, x: &str, y: &str) -> bool {
        Self::are_siblings(store, x, y)
            && Self::has_gender(store, x, Gender::Male)
            && Self::has_gender(store, y, Gender::Male)
    }

    pub fn are_sisters(store: &FamilyStore, x: &str, y: &str) -> bool {
        Self::are_siblings(store, x, y)
            && Self::has_gender(store, x, Gender::Female)
            && Self::has_gender(store, y, Gender::Female)
    }

    /// Verdadeiro se algum pai biológico de `x` é irmão de algum pai
    /// biológico de `y`. A irmandade dos pais usa a regra estendida.
    pub fn are_cousins(store: &FamilyStore, x: &str, y: &str) -> bool {
        let x_parents = store.biological_parents_of(x);
        let y_parents = store.biological_parents_of(y);
        let found = x_parents.iter().any(|xp| {
            y_parents
                .iter()
                .any(|yp| Self::are_siblings(store, xp, yp))
        });
        tracing::trace!(x, y, found, "regra: primos");
        found
    }

    /// Avalia uma relação qualquer de `x` para `y`.
    pub fn holds(store: &FamilyStore, relation: Relation, x: &str, y: &str) -> bool {
        match relation {
            Relation::Parent => Self::is_parent(store, x, y),
            Relation::Sibling => Self::are_siblings(store, x, y),
            Relation::Brother => Self::are_brothers(store, x, y),
            Relation::Sister => Self::are_sisters(store, x, y),
            Relation::Cousin => Self::are_cousins(store, x, y),
        }
    }

    /// Todas as relações que valem de `x` para `y`, na ordem de [`Relation::ALL`].
    pub fn relations_between(store: &FamilyStore, x: &str, y: &str) -> Vec<Relation> {
        Relation::ALL
            .into_iter()
            .filter(|relation| Self::holds(store, *relation, x, y))
            .collect()
    }

    // Gênero desconhecido nunca casa.
    fn has_gender(store: &FamilyStore, person: &str, gender: Gender) -> bool {
        store.gender(person) == Some(gender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_parents(links: &[(&str, &str)]) -> FamilyStore {
        let mut store = FamilyStore::new();
        for (parent, child) in links {
            store.assert_parent(parent, child);
        }
        store
    }

    // ─── parent ────────────────────────────────────────────────

    #[test]
    fn biological_parent_without_marriage() {
        let store = store_with_parents(&[("Andy", "Bob")]);
        assert!(KinshipRules::is_parent(&store, "Andy", "Bob"));
        assert!(!KinshipRules::is_parent(&store, "Bob", "Andy"));
    }

    #[test]
    fn spouse_of_parent_is_parent() {
        let mut store = store_with_parents(&[("Bob", "Cecil")]);
        store.assert_marriage("Bob", "Helen");
        assert!(KinshipRules::is_parent(&store, "Helen", "Cecil"));
        assert!(!store.biological_parents_of("Cecil").contains("Helen"));
    }

    #[test]
    fn shared_paths_collapse_in_parent_set() {
        let mut store = store_with_parents(&[("Bob", "Cecil"), ("Helen", "Cecil")]);
        store.assert_marriage("Bob", "Helen");
        let parents = KinshipRules::all_parents_of(&store, "Cecil");
        assert_eq!(parents.len(), 2);
    }

    // ─── siblings ──────────────────────────────────────────────

    #[test]
    fn siblings_via_shared_biological_parent() {
        let store = store_with_parents(&[("Dennis", "Edward"), ("Dennis", "Quinn")]);
        assert!(KinshipRules::are_siblings(&store, "Edward", "Quinn"));
        assert!(KinshipRules::are_siblings(&store, "Quinn", "Edward"));
    }

    #[test]
    fn step_siblings_via_marriage() {
        let mut store = store_with_parents(&[("Dennis", "Edward"), ("Pattie", "Quinn")]);
        store.assert_marriage("Dennis", "Pattie");
        assert!(KinshipRules::are_siblings(&store, "Edward", "Quinn"));
    }

    #[test]
    fn nobody_is_own_sibling() {
        let store = store_with_parents(&[("Dennis", "Edward")]);
        assert!(!KinshipRules::are_siblings(&store, "Edward", "Edward"));
        assert!(!KinshipRules::are_siblings(&store, "Nobody", "Nobody"));
    }

    #[test]
    fn parentless_people_are_not_siblings() {
        let mut store = FamilyStore::new();
        store.assert_marriage("Gigi", "Martin");
        assert!(!KinshipRules::are_siblings(&store, "Gigi", "Martin"));
    }

    // ─── brothers / sisters ────────────────────────────────────

    #[test]
    fn brothers_and_sisters_need_matching_gender() {
        let mut store = store_with_parents(&[
            ("Ann", "Carl"),
            ("Ann", "Dave"),
            ("Ann", "Eve"),
            ("Ann", "Fay"),
            ("Ann", "Gus"),
        ]);
        store.set_gender("Carl", Gender::Male);
        store.set_gender("Dave", Gender::Male);
        store.set_gender("Eve", Gender::Female);
        store.set_gender("Fay", Gender::Female);

        assert!(KinshipRules::are_brothers(&store, "Carl", "Dave"));
        assert!(KinshipRules::are_sisters(&store, "Eve", "Fay"));
        assert!(!KinshipRules::are_brothers(&store, "Carl", "Eve"));
        assert!(!KinshipRules::are_sisters(&store, "Eve", "Carl"));
        // Gus tem gênero desconhecido
        assert!(!KinshipRules::are_brothers(&store, "Carl", "Gus"));
        assert!(!KinshipRules::are_sisters(&store, "Gus", "Fay"));
    }

    #[test]
    fn same_gender_without_siblinghood_is_false() {
        let mut store = FamilyStore::new();
        store.set_gender("Oscar", Gender::Male);
        store.set_gender("Quinn", Gender::Male);
        assert!(!KinshipRules::are_brothers(&store, "Oscar", "Quinn"));
    }

    // ─── cousins ───────────────────────────────────────────────

    fn cousin_store() -> FamilyStore {
        store_with_parents(&[
            ("Cecil", "John"),
            ("Cecil", "Mary"),
            ("John", "Adam"),
            ("Mary", "Ben"),
        ])
    }

    #[test]
    fn cousins_via_sibling_parents() {
        let store = cousin_store();
        assert!(KinshipRules::are_cousins(&store, "Adam", "Ben"));
        assert!(KinshipRules::are_cousins(&store, "Ben", "Adam"));
    }

    #[test]
    fn generation_mismatch_is_not_cousins() {
        let store = cousin_store();
        assert!(!KinshipRules::are_cousins(&store, "Adam", "Mary"));
        assert!(!KinshipRules::are_cousins(&store, "Mary", "Adam"));
    }

    #[test]
    fn cousin_rule_ignores_step_parents_of_x_and_y() {
        // Zoe é madrasta de Adam, e irmã de Mary: não torna Adam primo de Ben.
        let mut store = store_with_parents(&[
            ("Gran", "Zoe"),
            ("Gran", "Mary"),
            ("Mary", "Ben"),
            ("Walt", "Adam"),
        ]);
        store.assert_marriage("Walt", "Zoe");
        assert!(KinshipRules::is_parent(&store, "Zoe", "Adam"));
        assert!(!KinshipRules::are_cousins(&store, "Adam", "Ben"));
    }

    #[test]
    fn cousin_rule_uses_step_siblinghood_of_parents() {
        // John e Mary são irmãos apenas por padrasto; seus filhos são primos.
        let mut store = store_with_parents(&[
            ("Dennis", "John"),
            ("Pattie", "Mary"),
            ("John", "Adam"),
            ("Mary", "Ben"),
        ]);
        store.assert_marriage("Dennis", "Pattie");
        assert!(KinshipRules::are_cousins(&store, "Adam", "Ben"));
    }

    #[test]
    fn straight_line_has_no_cousins() {
        let chain = ["Andy", "Bob", "Cecil", "Dennis", "Edward", "Felix"];
        let links: Vec<(&str, &str)> = chain.windows(2).map(|w| (w[0], w[1])).collect();
        let store = store_with_parents(&links);
        for x in chain {
            for y in chain {
                assert!(!KinshipRules::are_cousins(&store, x, y), "{x}/{y}");
            }
        }
    }

    #[test]
    fn self_cousin_follows_set_logic() {
        // Dois pais biológicos irmãos entre si: Kid é "primo" de si mesmo.
        let store = store_with_parents(&[
            ("Gran", "Al"),
            ("Gran", "Bea"),
            ("Al", "Kid"),
            ("Bea", "Kid"),
        ]);
        assert!(KinshipRules::are_cousins(&store, "Kid", "Kid"));
    }

    // ─── propriedades gerais ───────────────────────────────────

    #[test]
    fn unknown_names_yield_false_or_empty() {
        let store = cousin_store();
        assert!(KinshipRules::all_parents_of(&store, "Ghost").is_empty());
        for relation in Relation::ALL {
            assert!(!KinshipRules::holds(&store, relation, "Ghost", "Adam"));
            assert!(!KinshipRules::holds(&store, relation, "Adam", "Ghost"));
        }
    }

    #[test]
    fn symmetric_relations_are_symmetric() {
        let mut store = cousin_store();
        store.assert_marriage("John", "Lia");
        store.assert_parent("Lia", "Cleo");
        store.set_gender("Adam", Gender::Male);
        store.set_gender("Ben", Gender::Male);
        let people = ["Cecil", "John", "Mary", "Adam", "Ben", "Lia", "Cleo", "Ghost"];
        for x in people {
            for y in people {
                for relation in [
                    Relation::Sibling,
                    Relation::Brother,
                    Relation::Sister,
                    Relation::Cousin,
                ] {
                    assert_eq!(
                        KinshipRules::holds(&store, relation, x, y),
                        KinshipRules::holds(&store, relation, y, x),
                        "{relation} {x}/{y}"
                    );
                }
            }
        }
    }

    #[test]
    fn relations_between_lists_all_matches() {
        let mut store = cousin_store();
        store.set_gender("John", Gender::Male);
        store.set_gender("Mary", Gender::Female);
        store.assert_parent("Cecil", "Luke");
        store.set_gender("Luke", Gender::Male);

        assert_eq!(
            KinshipRules::relations_between(&store, "John", "Luke"),
            vec![Relation::Sibling, Relation::Brother]
        );
        assert_eq!(
            KinshipRules::relations_between(&store, "Cecil", "Mary"),
            vec![Relation::Parent]
        );
        assert!(KinshipRules::relations_between(&store, "Mary", "Cecil").is_empty());
    }
}
