//! # Configuração via Ambiente
//!
//! Duas variáveis controlam a execução:
//!
//! | Variável | Valores | Padrão |
//! |----------|---------|--------|
//! | `RUST_LOG` | filtro do `tracing-subscriber` | `info` |
//! | `KINSHIP_FORMAT` | `text` \| `json` | `text` |
//!
//! `RUST_LOG` é lido direto pelo `EnvFilter` em `main`.

use std::str::FromStr;

use crate::error::KinshipError;

/// Nome da variável que escolhe o formato do relatório.
pub const FORMAT_VAR: &str = "KINSHIP_FORMAT";

/// Formato de saída do relatório.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Uma pergunta por linha: `Are Adam and Ben cousins? true`
    #[default]
    Text,
    /// Array JSON pretty-printed.
    Json,
}

impl FromStr for ReportFormat {
    type Err = KinshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(KinshipError::InvalidFormat(s.to_string())),
        }
    }
}

/// Configuração resolvida da execução.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub format: ReportFormat,
}

impl Config {
    /// Lê a configuração das variáveis de ambiente do processo.
    pub fn from_env() -> Result<Self, KinshipError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Lê a configuração de uma fonte arbitrária de chave → valor.
    ///
    /// Variável ausente ou vazia usa o padrão.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, KinshipError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup(FORMAT_VAR) {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => ReportFormat::default(),
        };
        Ok(Self { format })
    }
}
