//! Command-line front end: the desktop form flow without the form.
//!
//! Every flag maps one-to-one onto a `CaseForm` field, so validation and
//! defaults are exactly those of the web adapter.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::assembly::assembler::generate_petition;
use crate::assembly::store::DirectoryStore;
use crate::config::Config;
use crate::layout::default_page_style;
use crate::models::case::CaseForm;
use crate::render::{persist, OutputDirs};

#[derive(Debug, Parser)]
#[command(
    name = "petition",
    version,
    propagate_version = true,
    about = "Gerador de Petições: assembles health-plan petitions from text blocks.",
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP API.
    Serve {
        /// Port to listen on (overrides PORT).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Generate one petition and write it to the output directory.
    Generate(GenerateArgs),
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Court venue (comarca).
    #[arg(long)]
    pub comarca: Option<String>,
    /// Claimant with full qualification.
    #[arg(long)]
    pub requerente: Option<String>,
    /// Health plan: unimed, bradesco, notredame, samaritano, amil, sulamerica.
    #[arg(long)]
    pub plano: Option<String>,
    /// Processing priority: none, idoso, deficiente.
    #[arg(long)]
    pub prioridade: Option<String>,
    /// Free justice: none, idoso_ou_tutelado, menor.
    #[arg(long)]
    pub gratuidade: Option<String>,
    /// Illness or condition.
    #[arg(long)]
    pub doenca: Option<String>,
    /// Denial type: tacita, outra.
    #[arg(long)]
    pub negativa: Option<String>,
    /// Demand type: deficiencia_clinico, deficiencia_domiciliar, idoso_clinico, idoso_domiciliar, outros.
    #[arg(long = "tipo-demanda")]
    pub tipo_demanda: Option<String>,
    /// Urgency paragraph.
    #[arg(long)]
    pub urgencia: Option<String>,
    /// Urgency type: clinica, domiciliar.
    #[arg(long = "urgencia-tipo")]
    pub urgencia_tipo: Option<String>,
    /// Request type: clinica, domiciliar.
    #[arg(long)]
    pub pedido: Option<String>,
    /// Directory with the fragment files (overrides BLOCKS_DIR).
    #[arg(long = "blocks-dir")]
    pub blocks_dir: Option<PathBuf>,
    /// Directory for the generated document (overrides OUTPUT_DIR).
    #[arg(long = "output-dir")]
    pub output_dir: Option<PathBuf>,
}

impl GenerateArgs {
    fn split(self) -> (CaseForm, Option<PathBuf>, Option<PathBuf>) {
        let form = CaseForm {
            comarca: self.comarca,
            requerente: self.requerente,
            plano: self.plano,
            prioridade: self.prioridade,
            gratuidade: self.gratuidade,
            doenca: self.doenca,
            negativa: self.negativa,
            tipo_demanda: self.tipo_demanda,
            urgencia: self.urgencia,
            urgencia_tipo: self.urgencia_tipo,
            pedido: self.pedido,
        };
        (form, self.blocks_dir, self.output_dir)
    }
}

/// Generates the petition and returns the path it was written to.
pub fn run_generate(config: &Config, args: GenerateArgs) -> Result<PathBuf> {
    let (form, blocks_dir, output_dir) = args.split();
    let case = form.into_case()?;

    let store = DirectoryStore::new(blocks_dir.unwrap_or_else(|| config.blocks_dir.clone()));
    let destination = OutputDirs::new(output_dir.unwrap_or_else(|| config.output_dir.clone()))
        .with_fallback(&config.fallback_dir);

    let petition = generate_petition(&case, &store, &default_page_style())?;
    let path = persist(&petition.bytes, &petition.file_name, &destination)?;

    info!(
        "Petition generated: {} ({} paragraphs)",
        path.display(),
        petition.paragraphs.len()
    );
    Ok(path)
}
