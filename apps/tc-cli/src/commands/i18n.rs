// i18n.rs — Translation completeness check.

use std::path::PathBuf;

use clap::Subcommand;
use tc_i18n::{check, LocaleCatalog};

#[derive(Subcommand)]
pub enum I18nCommands {
    /// Compare every locale file against the base locale.
    Check {
        /// Directory containing `<locale>.json` files.
        #[arg(long, default_value = "locales")]
        dir: PathBuf,
        /// Locale every other locale must match.
        #[arg(long, default_value = "en")]
        base: String,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

pub fn execute(cmd: &I18nCommands) -> anyhow::Result<()> {
    match cmd {
        I18nCommands::Check { dir, base, json } => {
            let catalog = LocaleCatalog::load_dir(dir)?;
            let report = check(&catalog, base)?;

            if *json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }

            if !report.is_complete() {
                anyhow::bail!(
                    "{} missing translation key(s) across {} locale(s)",
                    report.total_missing(),
                    report.locales.iter().filter(|l| !l.is_complete()).count()
                );
            }
            Ok(())
        }
    }
}
