//! # Erros do Domínio
//!
//! As consultas de parentesco são funções totais: nomes desconhecidos
//! produzem conjuntos vazios ou `false`, nunca erro. Os únicos erros
//! existem nas bordas onde texto livre vira tipo forte — o gênero de
//! uma pessoa e o formato do relatório.

use thiserror::Error;

/// Erros de validação na entrada de fatos e configuração.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KinshipError {
    /// Gênero fora de {"male", "female"}.
    #[error("invalid gender {0:?}: expected \"male\" or \"female\"")]
    InvalidGender(String),

    /// Valor de `KINSHIP_FORMAT` não reconhecido.
    #[error("invalid report format {0:?}: expected \"text\" or \"json\"")]
    InvalidFormat(String),
}
