//! Configuration display handler

use crate::cli::output::print_config;
use crate::cli::output::print_warning;
use crate::AppConfig;
use crate::Result;

pub fn handle_config_command(config: &AppConfig) -> Result<()> {
    print_config(config);

    if let Err(e) = config.validate() {
        println!();
        print_warning(&format!("Configuration is not usable yet: {e}"));
    }
    Ok(())
}
