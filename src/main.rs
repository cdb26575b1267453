use astra::Server;
use log::{error, info, warn};
use rental_search::config::Config;
use rental_search::db::{apply_sql_file, init_db, Database};
use rental_search::responses::html_error_response;
use rental_search::router::handle;
use simplelog::{ColorChoice, TermLogger, TerminalMode};

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = TermLogger::init(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Logger initialization failed: {e}");
    }

    let db = Database::new(config.db_path.clone());

    if let Err(e) = init_db(&db, &config.schema_path) {
        error!("Database initialization failed: {e}");
        std::process::exit(1);
    }

    if let Some(seed) = &config.seed_path {
        match apply_sql_file(&db, seed) {
            Ok(()) => info!("Seeded listings from {seed}"),
            Err(e) => {
                error!("Seeding failed: {e}");
                std::process::exit(1);
            }
        }
    }

    info!("Starting server at http://{}", config.bind_addr);

    let server = Server::bind(&config.bind_addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => {
            warn!("Request failed ({}): {err}", err.status());
            html_error_response(err)
        }
    });

    if let Err(e) = result {
        error!("Server ended with error: {e}");
    }

    info!("Server shut down cleanly.");
}
