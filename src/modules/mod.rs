pub mod generator;
pub mod optimizer;
pub mod pregen;
pub mod session;
pub mod session_store;
pub mod standings;
pub mod tracker;

pub mod models {
    pub mod car;
    pub mod heat;
    pub mod result;
    pub mod roster;
}

pub mod helpers {
    pub mod config;
    pub mod general;
    pub mod heat;
    pub mod logging;
}
