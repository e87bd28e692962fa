use rocket::http::Status;
use rocket::local::blocking::Client;
use serde_json::{json, Value};

use derby_heats::build_rocket;

fn client() -> Client {
    Client::tracked(build_rocket()).expect("valid rocket instance")
}

fn create_session(client: &Client, cars: usize, lanes: usize) -> Value {
    let response = client
        .post("/api/sessions")
        .json(&json!({ "cars": cars, "lanes": lanes }))
        .dispatch();
    assert_eq!(response.status(), Status::Ok);

    response.into_json::<Value>().expect("session json")
}

#[test]
fn creates_a_table_driven_session() {
    let client = client();
    let session = create_session(&client, 8, 4);

    assert_eq!(session["lane_count"], 4);
    assert_eq!(session["heats"].as_array().unwrap().len(), 8);
    assert_eq!(session["heats"][0]["numbers"], json!(["1", "3", "5", "8"]));
    assert_eq!(session["heats"][0]["state"], "pending");
    assert_eq!(session["progress"]["next_heat"], 0);
    assert_eq!(session["progress"]["on_deck"], 1);
    assert_eq!(session["progress"]["title"], "Heat 1 of 8");
    assert!(session["summary"].as_str().unwrap().starts_with("Heat 1: 1 3 5 8\n"));
}

#[test]
fn rejects_invalid_counts() {
    let client = client();

    let response = client
        .post("/api/sessions")
        .json(&json!({ "cars": 0, "lanes": 4 }))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);

    let response = client
        .post("/api/sessions")
        .json(&json!({ "cars": 4, "lanes": 0 }))
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn records_results_and_ranks_cars() {
    let client = client();
    let session = create_session(&client, 3, 3);
    let id = session["id"].as_u64().unwrap();

    for (lane, place) in [(0, 2), (1, 1), (2, 3)] {
        let response = client
            .put(format!("/api/sessions/{}/heats/0/lanes/{}", id, lane))
            .json(&json!({ "place": place }))
            .dispatch();
        assert_eq!(response.status(), Status::Ok);
    }

    let heat: Value = client
        .get(format!("/api/sessions/{}/heats/0", id))
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(heat["state"], "complete");
    assert_eq!(heat["complete"], true);

    let progress: Value = client
        .post(format!("/api/sessions/{}/advance", id))
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(progress["current_heat"], 1);
    assert_eq!(progress["on_deck"], 2);

    let standings: Value = client
        .get(format!("/api/sessions/{}/standings", id))
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(standings.as_array().unwrap().len(), 3);
    assert_eq!(standings[0]["position"], 1);
    assert!(standings[0]["score"].as_i64().unwrap() <= standings[1]["score"].as_i64().unwrap());

    let cleared: Value = client
        .delete(format!("/api/sessions/{}/heats/0", id))
        .dispatch()
        .into_json()
        .unwrap();
    assert_eq!(cleared["state"], "pending");
}

#[test]
fn out_of_range_and_unknown_sessions_are_not_found() {
    let client = client();
    let session = create_session(&client, 4, 2);
    let id = session["id"].as_u64().unwrap();

    let response = client
        .put(format!("/api/sessions/{}/heats/4/lanes/0", id))
        .json(&json!({ "place": 1 }))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = client
        .put(format!("/api/sessions/{}/heats/0/lanes/2", id))
        .json(&json!({ "place": 1 }))
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = client.get("/api/sessions/999/progress").dispatch();
    assert_eq!(response.status(), Status::NotFound);

    let response = client.delete(format!("/api/sessions/{}", id)).dispatch();
    assert_eq!(response.status(), Status::NoContent);
    let response = client.get(format!("/api/sessions/{}", id)).dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn regenerating_resets_results() {
    let client = client();
    let session = create_session(&client, 5, 3);
    let id = session["id"].as_u64().unwrap();

    client
        .put(format!("/api/sessions/{}/heats/0/lanes/0", id))
        .json(&json!({ "place": 1 }))
        .dispatch();
    client
        .put(format!("/api/sessions/{}/current", id))
        .json(&json!({ "heat": 5 }))
        .dispatch();

    let regenerated: Value = client
        .post(format!("/api/sessions/{}/regenerate", id))
        .json(&json!({ "cars": 6, "lanes": 2 }))
        .dispatch()
        .into_json()
        .unwrap();

    assert_eq!(regenerated["heats"].as_array().unwrap().len(), 6);
    assert_eq!(regenerated["progress"]["current_heat"], 0);
    assert_eq!(regenerated["progress"]["finished"], false);
    for heat in regenerated["heats"].as_array().unwrap() {
        assert_eq!(heat["state"], "pending");
    }
}
