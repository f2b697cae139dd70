use std::time::{Duration, Instant};

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cube_solver_tui::client::{SolveCompletion, SolverConfig, SolverRuntime};
use cube_solver_tui::core::{CubeState, SolveController};
use cube_solver_tui::types::{Color, Face, Move, GENERIC_ERROR_MESSAGE, SOLVE_REVEAL_DELAY_MS};

fn uniform_cube(color: &str) -> serde_json::Value {
    let face = serde_json::to_value(vec![color; 9]).unwrap();
    let mut cube = serde_json::Map::new();
    for key in ["U", "L", "F", "R", "B", "D"] {
        cube.insert(key.to_string(), face.clone());
    }
    serde_json::Value::Object(cube)
}

fn wait_for(runtime: &mut SolverRuntime) -> SolveCompletion {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(done) = runtime.try_recv() {
            return done;
        }
        assert!(Instant::now() < deadline, "solver never answered");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn runtime_for(endpoint: String) -> SolverRuntime {
    let config = SolverConfig {
        endpoint,
        request_timeout_ms: Some(2_000),
        ..SolverConfig::default()
    };
    tokio_test::assert_ok!(SolverRuntime::start(&config))
}

#[test]
fn runtime_round_trip_drives_controller() {
    let server = tokio_test::block_on(MockServer::start());
    tokio_test::block_on(
        Mock::given(method("POST"))
            .and(path("/solve"))
            .and(body_json(serde_json::json!({ "scramble": "R U'" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "solution": "U R'",
                "scrambled_cube": uniform_cube("red"),
                "solved_cube": uniform_cube("white"),
                "animation": [],
            })))
            .expect(1)
            .mount(&server),
    );

    let mut runtime = runtime_for(format!("{}/solve", server.uri()));
    let mut controller = SolveController::new(3);
    controller.add_move(Move::cw(Face::Right));
    controller.add_move(Move::ccw(Face::Up));
    runtime.submit(controller.solve().unwrap());

    let done = wait_for(&mut runtime);
    assert!(controller.complete(done.session, done.result));
    assert_eq!(controller.solution(), Some("U R'"));
    assert_eq!(controller.cube().face(Face::Front), &[Some(Color::Red); 9]);

    controller.tick(SOLVE_REVEAL_DELAY_MS);
    assert_eq!(controller.cube().face(Face::Front), &[Some(Color::White); 9]);
    assert_ne!(controller.cube(), &CubeState::initial());
}

#[test]
fn runtime_reports_service_error_text() {
    let server = tokio_test::block_on(MockServer::start());
    tokio_test::block_on(
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "error": "Invalid move sequence" })),
            )
            .mount(&server),
    );

    let mut runtime = runtime_for(format!("{}/solve", server.uri()));
    let mut controller = SolveController::new(3);
    controller.add_move(Move::cw(Face::Back));
    runtime.submit(controller.solve().unwrap());

    let done = wait_for(&mut runtime);
    controller.complete(done.session, done.result);
    assert_eq!(controller.error(), Some("Invalid move sequence"));
    assert_eq!(controller.cube(), &CubeState::initial());
}

#[test]
fn runtime_maps_unreachable_solver_to_generic_error() {
    // Bind and drop a listener to get a port nobody is serving.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|l| l.local_addr())
        .unwrap()
        .port();
    let mut runtime = runtime_for(format!("http://127.0.0.1:{port}/solve"));
    let mut controller = SolveController::new(3);
    controller.add_move(Move::cw(Face::Down));
    runtime.submit(controller.solve().unwrap());

    let done = wait_for(&mut runtime);
    controller.complete(done.session, done.result);
    assert_eq!(controller.error(), Some(GENERIC_ERROR_MESSAGE));
    assert!(!controller.loading());
}
