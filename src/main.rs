#![allow(dead_code)]
//! # Kinship — Regras de Parentesco
//!
//! **Ponto de entrada principal**: monta a família de referência, avalia
//! as perguntas de parentesco e imprime uma resposta por linha.
//!
//! ## Fluxo
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging (stderr)
//!   ├── Lê Config do ambiente (KINSHIP_FORMAT)
//!   ├── Monta FamilyStore via seed::family_tree()
//!   ├── Avalia report::reference_checks()
//!   └── Imprime relatório em stdout
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! KINSHIP_FORMAT=json cargo run
//! ```

/// Módulo `config` — configuração via variáveis de ambiente.
mod config;

/// Módulo `core` — fatos declarados: gênero, casamento, filiação.
mod core;

/// Módulo `error` — erros de validação do domínio.
mod error;

/// Módulo `inference` — regras derivadas: pai, irmãos, primos.
mod inference;

/// Módulo `report` — perguntas de referência e formatação.
mod report;

/// Módulo `seed` — família de referência.
mod seed;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<()> {
    // Logs vão para stderr; stdout fica só com o relatório.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env().context("Falha ao ler configuração do ambiente")?;
    tracing::debug!(format = ?config.format, "configuração carregada");

    let store = seed::family_tree();
    let checks = report::reference_checks(&store);
    let output = report::render(&checks, config.format).context("Falha ao renderizar relatório")?;
    println!("{}", output);

    let failed = checks.iter().filter(|c| !c.passed()).count();
    tracing::info!(checks = checks.len(), failed, "relatório concluído");

    Ok(())
}
