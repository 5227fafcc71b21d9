//! # FamilyStore — Contêiner Central de Fatos
//!
//! O [`FamilyStore`] armazena os fatos declarados sobre uma família, em
//! memória, e responde às consultas diretas sobre eles. Tudo o que é
//! **derivado** (irmãos, primos, padrastos) fica em
//! [`KinshipRules`](crate::inference::KinshipRules).
//!
//! ## Armazenamento
//!
//! - **Gênero**: `HashMap<String, Gender>` — no máximo um valor por pessoa
//! - **Casamentos**: `HashMap<String, HashSet<String>>` — adjacência simétrica
//! - **Filhos**: `HashMap<String, HashSet<String>>` — pai/mãe → filhos biológicos
//! - **Índice reverso**: `HashMap<String, HashSet<String>>` — filho → pais biológicos
//!
//! O índice reverso é mantido a cada [`assert_parent()`](FamilyStore::assert_parent)
//! e pode ser recomputado via [`rebuild_index()`](FamilyStore::rebuild_index).
//! Ele precisa responder **exatamente** o mesmo conjunto que uma varredura
//! de `children` responderia.
//!
//! ## Ciclo de Vida
//!
//! Os fatos são declarados uma vez, na fase de montagem, e apenas somados:
//! não há remoção. Depois disso o store é só lido. Nenhuma validação de
//! ciclos ou auto-parentesco é feita.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::Gender;
use crate::error::KinshipError;

/// Base de fatos familiares in-memory.
///
/// Cada instância é independente: não há estado global, e os testes
/// criam quantos stores precisarem.
#[derive(Debug, Default, Clone)]
pub struct FamilyStore {
    /// Gênero declarado: pessoa → gênero.
    genders: HashMap<String, Gender>,

    /// Casamentos: pessoa → cônjuges. Se `b ∈ marriages[a]` então `a ∈ marriages[b]`.
    marriages: HashMap<String, HashSet<String>>,

    /// Filiação biológica: pai/mãe → filhos.
    children: HashMap<String, HashSet<String>>,

    /// Índice reverso de `children`: filho → pais biológicos.
    parents: HashMap<String, HashSet<String>>,
}

impl FamilyStore {
    /// Cria um store vazio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconstrói o índice reverso `parents` a partir de `children`.
    pub fn rebuild_index(&mut self) {
        self.parents.clear();
        for (parent, kids) in &self.children {
            for child in kids {
                self.parents
                    .entry(child.clone())
                    .or_default()
                    .insert(parent.clone());
            }
        }
    }

    /// Declara o casamento entre `a` e `b`, nos dois sentidos.
    ///
    /// Idempotente. Não rejeita `a == b` nem múltiplos cônjuges.
    pub fn assert_marriage(&mut self, a: &str, b: &str) {
        tracing::debug!(a, b, "store: casamento declarado");
        self.marriages
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string());
        self.marriages
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string());
    }

    /// Declara que `parent` é pai/mãe biológico de `child`.
    ///
    /// Idempotente. Atualiza o índice reverso junto com `children`.
    pub fn assert_parent(&mut self, parent: &str, child: &str) {
        tracing::debug!(parent, child, "store: filiação declarada");
        self.children
            .entry(parent.to_string())
            .or_default()
            .insert(child.to_string());
        self.parents
            .entry(child.to_string())
            .or_default()
            .insert(parent.to_string());
    }

    /// Define (ou sobrescreve) o gênero de uma pessoa.
    pub fn set_gender(&mut self, person: &str, gender: Gender) {
        tracing::debug!(person, gender = %gender, "store: gênero definido");
        self.genders.insert(person.to_string(), gender);
    }

    /// Define o gênero a partir de texto livre.
    ///
    /// # Erros
    ///
    /// [`KinshipError::InvalidGender`] se `value` não for "male" nem "female".
    /// Nesse caso o store não é alterado.
    pub fn set_gender_str(&mut self, person: &str, value: &str) -> Result<(), KinshipError> {
        let gender = value.parse::<Gender>()?;
        self.set_gender(person, gender);
        Ok(())
    }

    /// Gênero declarado, ou `None` se desconhecido.
    pub fn gender(&self, person: &str) -> Option<Gender> {
        self.genders.get(person).copied()
    }

    /// Cônjuges declarados de uma pessoa (vazio se nenhum).
    pub fn spouses(&self, person: &str) -> BTreeSet<String> {
        collect(self.marriages.get(person))
    }

    /// Verifica por consulta direta se `b` é cônjuge de `a`.
    pub fn is_married(&self, a: &str, b: &str) -> bool {
        self.marriages
            .get(a)
            .map_or(false, |spouses| spouses.contains(b))
    }

    /// Filhos biológicos declarados de uma pessoa.
    pub fn children_of(&self, parent: &str) -> BTreeSet<String> {
        collect(self.children.get(parent))
    }

    /// Pais biológicos: todo `p` tal que `child ∈ children[p]`.
    ///
    /// Sem inferência por casamento. Responde pelo índice reverso em O(k).
    pub fn biological_parents_of(&self, child: &str) -> BTreeSet<String> {
        collect(self.parents.get(child))
    }

    /// Número de pessoas distintas mencionadas em qualquer fato.
    pub fn person_count(&self) -> usize {
        let mut people: HashSet<&str> = HashSet::new();
        people.extend(self.genders.keys().map(String::as_str));
        for (person, spouses) in &self.marriages {
            people.insert(person.as_str());
            people.extend(spouses.iter().map(String::as_str));
        }
        for (parent, kids) in &self.children {
            people.insert(parent.as_str());
            people.extend(kids.iter().map(String::as_str));
        }
        people.len()
    }

    /// Número de pares de casamento distintos.
    pub fn marriage_count(&self) -> usize {
        let directed: usize = self.marriages.values().map(HashSet::len).sum();
        let self_marriages = self
            .marriages
            .iter()
            .filter(|(person, spouses)| spouses.contains(*person))
            .count();
        (directed + self_marriages) / 2
    }

    /// Número de vínculos pai/mãe → filho distintos.
    pub fn parent_link_count(&self) -> usize {
        self.children.values().map(HashSet::len).sum()
    }
}

fn collect(set: Option<&HashSet<String>>) -> BTreeSet<String> {
    set.map(|s| s.iter().cloned().collect()).unwrap_or_default()
}
