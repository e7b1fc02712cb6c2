//! Verify the field axioms for a list of moduli
//!
//! ```text
//! cargo run -p gfcheck-axioms --example verify_gfp -- [--config verify.toml] [MODULUS...]
//! ```
//!
//! Moduli given on the command line replace the configured list. Set
//! `RUST_LOG=gfcheck_axioms=debug` to see every counterexample found.

use std::{env, error::Error, fs, process};

use gfcheck_axioms::{FieldVerifier, VerifyConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn run() -> Result<bool, Box<dyn Error>> {
    let mut config = VerifyConfig::default();
    let mut moduli = Vec::new();

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args.next().ok_or("--config needs a path")?;
            config = VerifyConfig::from_toml_str(&fs::read_to_string(path)?)?;
        } else {
            moduli.push(arg.parse::<i64>()?);
        }
    }
    if !moduli.is_empty() {
        config = config.with_moduli(moduli);
    }

    let verifier = FieldVerifier::new(config)?;
    let mut all_fields = true;
    for report in verifier.verify_configured()? {
        println!("{report}\n");
        all_fields &= report.is_field();
    }
    Ok(all_fields)
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    match run() {
        Ok(true) => println!("All moduli define fields."),
        Ok(false) => println!("Some moduli do not define fields."),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
