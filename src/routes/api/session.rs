use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};
use serde::{Deserialize, Serialize};

use crate::errors::{CustomResult, Error};
use crate::macros::session_error_handler::session_handle_error_http;
use crate::modules::helpers::heat::HeatsHelper;
use crate::modules::models::car::{Car, CarId};
use crate::modules::models::result::{HeatState, Placement};
use crate::modules::session::RaceSession;
use crate::modules::session_store::SessionStore;

/**************************************************************************************************/
/**************** ROUTES **************************************************************************/
/**************************************************************************************************/

/***** MODIFY SESSIONS *****/

/// # open a new race session
#[post("/sessions", data = "<new_session>")]
pub fn create(new_session: Json<NewSessionData>, store: &State<SessionStore>) -> Result<Json<ApiSession>, Status> {
    let session = session_handle_error_http!(
        RaceSession::new(new_session.cars, new_session.lanes),
        "routes/api/session:create",
        "session"
    );

    let id = store.insert(session);
    let view = session_handle_error_http!(
        store.with_session(id, |session| Ok(ApiSession::new(id, session))),
        "routes/api/session:create",
        "session"
    );

    Ok(Json(view))
}

/// # throw away the schedule and results and start over
#[post("/sessions/<id>/regenerate", data = "<new_session>")]
pub fn regenerate(id: u64, new_session: Json<NewSessionData>, store: &State<SessionStore>) -> Result<Json<ApiSession>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| {
            session.regenerate(new_session.cars, new_session.lanes)?;
            Ok(ApiSession::new(id, session))
        }),
        "routes/api/session:regenerate",
        "session"
    );

    Ok(Json(view))
}

#[delete("/sessions/<id>")]
pub fn close(id: u64, store: &State<SessionStore>) -> Result<Status, Status> {
    let _closed = session_handle_error_http!(store.remove(id), "routes/api/session:close", "session");

    Ok(Status::NoContent)
}

/***** RESULTS *****/

#[put("/sessions/<id>/heats/<heat>/lanes/<lane>", data = "<place>")]
pub fn record_place(id: u64, heat: usize, lane: usize, place: Json<PlaceData>, store: &State<SessionStore>) -> Result<Json<ApiHeat>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| {
            session.record_place(heat, lane, place.place)?;
            ApiHeat::new(heat, session)
        }),
        "routes/api/session:record_place",
        "heat"
    );

    Ok(Json(view))
}

#[delete("/sessions/<id>/heats/<heat>")]
pub fn clear_heat(id: u64, heat: usize, store: &State<SessionStore>) -> Result<Json<ApiHeat>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| {
            session.clear_heat(heat)?;
            ApiHeat::new(heat, session)
        }),
        "routes/api/session:clear_heat",
        "heat"
    );

    Ok(Json(view))
}

/***** PROGRESS *****/

#[put("/sessions/<id>/current", data = "<current>")]
pub fn set_current(id: u64, current: Json<CurrentHeatData>, store: &State<SessionStore>) -> Result<Json<ApiProgress>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| {
            session.set_current_heat(current.heat)?;
            Ok(ApiProgress::new(session))
        }),
        "routes/api/session:set_current",
        "heat"
    );

    Ok(Json(view))
}

#[post("/sessions/<id>/advance")]
pub fn advance(id: u64, store: &State<SessionStore>) -> Result<Json<ApiProgress>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| {
            session.advance();
            Ok(ApiProgress::new(session))
        }),
        "routes/api/session:advance",
        "session"
    );

    Ok(Json(view))
}

/***** GETTERS *****/

#[get("/sessions/<id>")]
pub fn get_one(id: u64, store: &State<SessionStore>) -> Result<Json<ApiSession>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| Ok(ApiSession::new(id, session))),
        "routes/api/session:get_one",
        "session"
    );

    Ok(Json(view))
}

#[get("/sessions/<id>/heats/<heat>")]
pub fn get_heat(id: u64, heat: usize, store: &State<SessionStore>) -> Result<Json<ApiHeat>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| ApiHeat::new(heat, session)),
        "routes/api/session:get_heat",
        "heat"
    );

    Ok(Json(view))
}

#[get("/sessions/<id>/progress")]
pub fn get_progress(id: u64, store: &State<SessionStore>) -> Result<Json<ApiProgress>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| Ok(ApiProgress::new(session))),
        "routes/api/session:get_progress",
        "session"
    );

    Ok(Json(view))
}

#[get("/sessions/<id>/standings")]
pub fn get_standings(id: u64, store: &State<SessionStore>) -> Result<Json<Vec<ApiStanding>>, Status> {
    let view = session_handle_error_http!(
        store.with_session(id, |session| Ok(ApiStanding::from_session(session))),
        "routes/api/session:get_standings",
        "standings"
    );

    Ok(Json(view))
}

/**************************************************************************************************/
/**************** STRUCTS *************************************************************************/
/**************************************************************************************************/

#[derive(Deserialize, Debug)]
pub struct NewSessionData {
    pub cars: usize,
    pub lanes: usize,
}

#[derive(Deserialize, Debug)]
pub struct PlaceData {
    pub place: i32,
}

#[derive(Deserialize, Debug)]
pub struct CurrentHeatData {
    pub heat: usize,
}

#[derive(Serialize, Debug)]
pub struct ApiSession {
    pub id: u64,
    pub cars: Vec<Car>,
    pub lane_count: usize,
    pub heats: Vec<ApiHeat>,
    pub progress: ApiProgress,
    pub summary: String,
}

impl ApiSession {
    pub fn new(id: u64, session: &RaceSession) -> ApiSession {
        let heats = (0..session.schedule().len())
            .filter_map(|heat| ApiHeat::new(heat, session).ok())
            .collect();

        ApiSession {
            id,
            cars: session.roster().cars().to_vec(),
            lane_count: session.schedule().lane_count(),
            heats,
            progress: ApiProgress::new(session),
            summary: HeatsHelper::schedule_summary(session.schedule(), session.roster()),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ApiHeat {
    pub heat: usize,
    pub lanes: Vec<CarId>,
    pub numbers: Vec<String>,
    pub state: HeatState,
    pub complete: bool,
    pub results: Vec<Option<Placement>>,
}

impl ApiHeat {
    pub fn new(heat: usize, session: &RaceSession) -> CustomResult<ApiHeat> {
        let heats = session.schedule().len();
        let lineup = session
            .schedule()
            .get(heat)
            .ok_or(Error::HeatOutOfRangeError { heat, heats })?;

        Ok(ApiHeat {
            heat,
            lanes: lineup.lanes().to_vec(),
            numbers: lineup.numbers(session.roster()).map(str::to_string).collect(),
            state: session.heat_state(heat)?,
            complete: session.is_heat_complete(heat)?,
            results: session.results().results(heat)?.to_vec(),
        })
    }
}

#[derive(Serialize, Debug)]
pub struct ApiProgress {
    pub current_heat: usize,
    pub finished: bool,
    pub next_heat: Option<usize>,
    pub on_deck: Option<usize>,
    pub title: Option<String>,
    pub preview: String,
}

impl ApiProgress {
    pub fn new(session: &RaceSession) -> ApiProgress {
        let on_deck = session.identify_heat_on_deck();

        ApiProgress {
            current_heat: session.current_heat(),
            finished: session.is_finished(),
            next_heat: session.identify_next_heat(),
            on_deck,
            title: (!session.is_finished())
                .then(|| HeatsHelper::run_title(session.current_heat(), session.schedule())),
            preview: HeatsHelper::heat_preview(on_deck, session.schedule(), session.roster()),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct ApiStanding {
    pub position: usize,
    pub car: Car,
    pub score: i64,
}

impl ApiStanding {
    pub fn from_session(session: &RaceSession) -> Vec<ApiStanding> {
        session
            .scores()
            .iter()
            .enumerate()
            .filter_map(|(i, standing)| {
                session.roster().get(standing.car).map(|car| ApiStanding {
                    position: i + 1,
                    car: car.clone(),
                    score: standing.score,
                })
            })
            .collect()
    }
}
