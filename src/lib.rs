use rocket::{routes, Build, Rocket};

use crate::modules::session_store::SessionStore;

pub mod errors;
pub mod modules;

mod macros {
    pub mod session_error_handler;
}

pub mod routes {
    pub mod api {
        pub mod session;
    }
}

/// # build the web service
/// mounts the race session api on `/api` with an empty session store
pub fn build_rocket() -> Rocket<Build> {
    use crate::routes::api;

    rocket::build()
        .manage(SessionStore::new())
        .mount(
            "/api",
            routes![
                // sessions
                api::session::create,
                api::session::regenerate,
                api::session::close,
                api::session::get_one,
                // heats
                api::session::record_place,
                api::session::clear_heat,
                api::session::get_heat,
                // progress
                api::session::set_current,
                api::session::advance,
                api::session::get_progress,
                // standings
                api::session::get_standings,
            ],
        )
}
