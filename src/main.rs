use projstat::cli::run;
use projstat::error::{CatalogError, ConfigError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        // Catalog and configuration failures are internal errors; anything else is a user error
        let internal = e.downcast_ref::<CatalogError>().is_some()
            || e.downcast_ref::<ConfigError>().is_some();
        if internal {
            eprintln!("Internal error: {}", e);
            // Show error chain if available
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut indent = 1;
                while let Some(err) = source {
                    eprintln!("{:indent$}  {}", "", err);
                    source = err.source();
                    indent += 1;
                }
            }
            std::process::exit(2);
        } else {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
