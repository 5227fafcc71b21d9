//! # Módulo Core — Fatos Declarados
//!
//! Este módulo agrupa os **tipos fundamentais** da base de fatos familiares.
//! Tudo o que as regras de parentesco derivam parte daqui:
//!
//! - [`Gender`] — Gênero de uma pessoa (masculino ou feminino)
//! - [`FamilyStore`] — Contêiner com as três relações declaradas:
//!   gênero, casamento (simétrico) e pai/mãe → filho (direcionado)
//!
//! ## Identidade
//!
//! Não existe um objeto `Person`: a pessoa **é** o seu nome, uma string
//! opaca e sensível a maiúsculas ("Bob" ≠ "bob").
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use crate::core::{FamilyStore, Gender};
//!
//! let mut store = FamilyStore::new();
//! store.set_gender("Bob", Gender::Male);
//! store.assert_marriage("Bob", "Helen");
//! store.assert_parent("Bob", "Cecil");
//!
//! assert!(store.is_married("Helen", "Bob"));
//! ```

/// Sub-módulo com a implementação de [`Gender`].
pub mod gender;

/// Sub-módulo com a implementação de [`FamilyStore`] — contêiner central.
pub mod family_store;

pub use family_store::FamilyStore;
pub use gender::Gender;
