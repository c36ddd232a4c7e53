//! `load_with_dotenv` finds `.env` from the working directory.
//!
//! Kept in its own test binary: `dotenvy` sets process variables the jail
//! does not know about, so nothing else may run after it here.

use figment::Jail;
use gotype_config::{GotypeConfig, OutputFormat};

#[test]
fn dotenv_in_working_directory_is_applied() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "GOTYPE_OUTPUT__FORMAT=raw\n")?;

        let config = GotypeConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.output.format, OutputFormat::Raw);
        Ok(())
    });
}
