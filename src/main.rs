//! CLI `assetinject`: aplica el inyector sobre un directorio de salida ya
//! generado por el build.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use assetinject_rust::config::{init_dotenv, InjectConfig, SourceConfig};
use assetinject_rust::{dist, CoreError, InjectReport, TemplateInjector};

#[derive(Debug, Parser)]
#[command(name = "assetinject", version, about = "Sustituye marcadores <!-- replace=\"NAME\" --> en los HTML de un dist")]
struct Cli {
    /// Directorio de salida del build.
    dist: PathBuf,

    /// Fuente de fragmentos: demo | json:<ruta> | dir:<ruta>. Tiene prioridad sobre INJECT_SOURCE.
    #[arg(long)]
    source: Option<SourceConfig>,

    /// Archivo de configuración JSON (en lugar de variables de entorno).
    #[arg(long, conflicts_with = "source")]
    config: Option<PathBuf>,

    /// Límite por resolución, en milisegundos.
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// No escribe nada; sólo informa.
    #[arg(long)]
    dry_run: bool,

    /// Imprime el reporte como JSON.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Configuración base (archivo `--config` o entorno) con los flags encima.
    fn resolve_config(&self) -> Result<InjectConfig, CoreError> {
        let base = match &self.config {
            Some(path) => InjectConfig::from_json_file(path)?,
            None => InjectConfig::from_env()?,
        };
        Ok(self.apply_overrides(base))
    }

    /// `--source` y `--timeout-ms` tienen prioridad sobre la configuración base.
    fn apply_overrides(&self, mut cfg: InjectConfig) -> InjectConfig {
        if let Some(source) = &self.source {
            cfg.source = source.clone();
        }
        if self.timeout_ms.is_some() {
            cfg.fetch_timeout_ms = self.timeout_ms;
        }
        cfg
    }
}

/// Resultado de una ejecución sobre el dist.
struct RunOutcome {
    total: usize,
    report: InjectReport,
    written: Vec<String>,
}

async fn inject_dist(cli: &Cli) -> Result<RunOutcome, CoreError> {
    let cfg = cli.resolve_config()?;
    info!("source={} timeout={:?}", cfg.source, cfg.fetch_timeout());
    let injector = TemplateInjector::from_config(&cfg).await?;

    let before = dist::load_dir(&cli.dist)?;
    let mut assets = before.clone();
    let report = injector.process(&mut assets).await?;

    let written = if cli.dry_run {
        Vec::new()
    } else {
        dist::write_changed(&cli.dist, &before, &assets)?
    };
    Ok(RunOutcome { total: assets.len(), report, written })
}

async fn run(cli: Cli) -> Result<(), CoreError> {
    let RunOutcome { total, report, written } = inject_dist(&cli).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("assets: {} | html: {} | reescritos: {} | marcadores: {} | fetches: {}",
                 total, report.scanned, report.rewritten, report.markers, report.fetches);
        for name in &written {
            println!("  escrito {name}");
        }
        for name in &report.skipped {
            println!("  omitido {name} (no es UTF-8)");
        }
        if cli.dry_run {
            println!("  (dry-run: no se escribió nada)");
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
