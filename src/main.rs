// src/main.rs
//
// Calculatrice de polynômes creux — point d’entrée (ligne de commande)
// --------------------------------------------------------------------
// But:
// - Lire des lignes (fichier ou entrée standard), une commande ou un littéral par ligne
// - Résultats sur stdout, diagnostics `ERROR <ligne> <message>` sur stderr
// - Journal (tracing) sur stderr, muet par défaut (WARN) : -v debug, -vv trace
//
// Code de sortie : 0, sauf erreur d’E/S (1).

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::FmtSubscriber;

mod app;
mod noyau;

use app::Calculatrice;

/// Arguments de la ligne de commande.
#[derive(Parser, Debug)]
#[command(
    name = "calculatrice_poly",
    version,
    about = "Calculatrice à pile de polynômes creux à plusieurs variables"
)]
struct Args {
    /// Fichier d’entrée (par défaut : entrée standard)
    fichier: Option<PathBuf>,

    /// Journal plus bavard sur stderr (-v : debug, -vv : trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Aucun journal (les diagnostics ERROR restent affichés)
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn niveau(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/* ------------------------ Journal ------------------------ */

fn installer_journal(niveau: LevelFilter) {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(niveau)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("journal indisponible: {e}");
    }
}

/* ------------------------ Entrée ------------------------ */

fn main() -> ExitCode {
    let args = Args::parse();
    installer_journal(args.niveau());

    let mut calc = Calculatrice::new();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut sortie = stdout.lock();
    let mut erreurs = stderr.lock();

    let res = match &args.fichier {
        Some(chemin) => match File::open(chemin) {
            Ok(f) => calc.execute(BufReader::new(f), &mut sortie, &mut erreurs),
            Err(e) => Err(e),
        },
        None => calc.execute(io::stdin().lock(), &mut sortie, &mut erreurs),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(erreur = %e, "entrée/sortie");
            ExitCode::FAILURE
        }
    }
}
