//! # Seed — Família de Referência
//!
//! Monta o conjunto de fatos usado pelo relatório: três linhagens retas
//! de cinco gerações, ligadas por casamentos, mais um ramo com primos.
//!
//! ```text
//! Andy → Bob → Cecil → Dennis → Edward → Felix
//!              Cecil → John → Adam
//!              Cecil → Mary → Ben
//! Gigi → Helen → Iris → Jane → Kate → Liz
//! Martin → Nancy → Oscar → Pattie → Quinn → Rebecca
//!
//! Bob ♥ Helen    Dennis ♥ Pattie    Gigi ♥ Martin
//! ```
//!
//! John, Mary, Adam e Ben não têm gênero declarado.

use crate::core::{FamilyStore, Gender};

const MALES: [&str; 9] = [
    "Andy", "Bob", "Cecil", "Dennis", "Edward", "Felix", "Martin", "Oscar", "Quinn",
];

const FEMALES: [&str; 9] = [
    "Gigi", "Helen", "Iris", "Jane", "Kate", "Liz", "Nancy", "Pattie", "Rebecca",
];

const MARRIAGES: [(&str, &str); 3] = [("Bob", "Helen"), ("Dennis", "Pattie"), ("Gigi", "Martin")];

const PARENT_LINKS: [(&str, &str); 19] = [
    ("Andy", "Bob"),
    ("Bob", "Cecil"),
    ("Cecil", "Dennis"),
    ("Dennis", "Edward"),
    ("Edward", "Felix"),
    ("Gigi", "Helen"),
    ("Helen", "Iris"),
    ("Iris", "Jane"),
    ("Jane", "Kate"),
    ("Kate", "Liz"),
    ("Martin", "Nancy"),
    ("Nancy", "Oscar"),
    ("Oscar", "Pattie"),
    ("Pattie", "Quinn"),
    ("Quinn", "Rebecca"),
    ("Cecil", "John"),
    ("Cecil", "Mary"),
    ("John", "Adam"),
    ("Mary", "Ben"),
];

/// Cria um [`FamilyStore`] com a família de referência.
pub fn family_tree() -> FamilyStore {
    let mut store = FamilyStore::new();
    for person in MALES {
        store.set_gender(person, Gender::Male);
    }
    for person in FEMALES {
        store.set_gender(person, Gender::Female);
    }
    for (a, b) in MARRIAGES {
        store.assert_marriage(a, b);
    }
    for (parent, child) in PARENT_LINKS {
        store.assert_parent(parent, child);
    }
    tracing::info!(
        people = store.person_count(),
        marriages = store.marriage_count(),
        parent_links = store.parent_link_count(),
        "família de referência montada"
    );
    store
}
