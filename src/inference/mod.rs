//! # Módulo Inference — Regras de Parentesco
//!
//! Este módulo contém o **avaliador de regras** que deriva relações
//! familiares a partir dos fatos do [`FamilyStore`](crate::core::FamilyStore).
//! Nada é armazenado: toda relação é recalculada sob demanda.
//!
//! ## Regras Implementadas
//!
//! | Regra | Condição |
//! |-------|----------|
//! | **Pai/Mãe** | x ∈ pais(z), incluindo cônjuges dos pais biológicos |
//! | **Irmãos** | x ≠ y e pais(x) ∩ pais(y) ≠ ∅ |
//! | **Irmãos (m)** | irmãos e ambos `male` |
//! | **Irmãs** | irmãos e ambas `female` |
//! | **Primos** | algum pai biológico de x é irmão de algum pai biológico de y |
//!
//! Veja [`KinshipRules`] para detalhes.

/// Sub-módulo com as regras de parentesco.
pub mod rules;

pub use rules::{KinshipRules, Relation};
