use rocket::{launch, Build, Rocket};

use derby_heats::build_rocket;
use derby_heats::modules::helpers::config::Config;
use derby_heats::modules::helpers::logging::setup_logging;

#[launch]
fn rocket() -> Rocket<Build> {
    let config = Config::from_env();
    setup_logging(&config).expect("Failed to setup logging");

    // every client opens its own session, see /api/sessions
    build_rocket()
}
