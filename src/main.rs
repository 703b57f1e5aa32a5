// src/main.rs
//
// Calculatrice RPN — point d’entrée ligne de commande
// ---------------------------------------------------
// Lit une expression en argument, affiche un nombre (ou l’erreur sur stderr).
// Traces : RUST_LOG (défaut "warn"), sur stderr.

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use calculatrice_rpn::{evaluate_with_steps, format_nombre};

/// Évalue une expression arithmétique (+ - * / % ^, abs, sqrt, parenthèses)
#[derive(Parser, Debug)]
#[command(name = "calculatrice_rpn", version, about, long_about = None)]
struct Cli {
    /// Expression à évaluer, ex: "(1 + 2) * 3"
    #[arg(allow_hyphen_values = true)]
    expression: String,

    /// Affiche aussi les jetons et la RPN
    #[arg(short, long)]
    demarche: bool,
}

fn installer_traces() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    installer_traces();

    let cli = Cli::parse();
    debug!(expression = %cli.expression, "entrée");

    match evaluate_with_steps(&cli.expression) {
        Ok((valeur, d)) => {
            if cli.demarche {
                println!("jetons: {}", d.jetons);
                println!("rpn: {}", d.rpn);
            }
            println!("{}", format_nombre(valeur));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
