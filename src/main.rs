use std::path::PathBuf;
use std::process;

use clap::Parser;

use twofa::{Config, Error, Totp};

/// Print the current TOTP code for a configured issuer.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Issuer to generate a token for (matched case-insensitively).
    /// Omit to list the configured issuers.
    issuer: Option<String>,

    /// Path to the secret file.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("twofa: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };
    let config = Config::load(&path)?;

    let Some(issuer) = &cli.issuer else {
        for issuer in config.issuers() {
            println!("{}", issuer);
        }
        return Err(Error::MissingIssuer);
    };

    // Duplicate issuer entries all match; one token line per entry.
    let mut matched = false;
    for account in config.matching(issuer) {
        let totp = Totp::new(account.secret.to_bytes()?);
        println!("{}", totp.generate_current()?);
        matched = true;
    }
    if !matched {
        return Err(Error::UnknownIssuer(issuer.clone()));
    }
    Ok(())
}
