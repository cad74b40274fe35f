use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::runner::{Runner, WorkflowResult};
use serde::Deserialize;
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, PoisonError, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};

type SharedModel = Arc<RwLock<VisualizationModel>>;

pub fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

#[derive(Debug)]
struct RerunFailed;

impl warp::reject::Reject for RerunFailed {}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RerunRequest {
    seed: Option<u64>,
}

fn read_model(state: &SharedModel) -> VisualizationModel {
    state.read().unwrap_or_else(PoisonError::into_inner).clone()
}

fn store(state: &SharedModel, result: &WorkflowResult) {
    let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
    *guard = VisualizationModel {
        seed: result.seed,
        run: Some(result.run.clone()),
        report: Some(result.report.clone()),
    };
}

/// JSON endpoints consumed by the external renderer.
fn routes(
    state: SharedModel,
    runner: Arc<Runner>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let state_filter = warp::any().map(move || state.clone());
    let runner_filter = warp::any().map(move || runner.clone());

    let run_route = warp::path("run")
        .and(warp::get())
        .and(state_filter.clone())
        .map(|state: SharedModel| match read_model(&state).run {
            Some(run) => warp::reply::with_status(warp::reply::json(run.as_ref()), StatusCode::OK),
            None => warp::reply::with_status(
                warp::reply::json(&json!({"status": "pending"})),
                StatusCode::NOT_FOUND,
            ),
        });

    let checks_route = warp::path("checks")
        .and(warp::get())
        .and(state_filter.clone())
        .map(|state: SharedModel| match read_model(&state).report {
            Some(report) => warp::reply::with_status(warp::reply::json(&report), StatusCode::OK),
            None => warp::reply::with_status(
                warp::reply::json(&json!({"status": "pending"})),
                StatusCode::NOT_FOUND,
            ),
        });

    let status_route = warp::path("status")
        .and(warp::get())
        .and(state_filter.clone())
        .and(runner_filter.clone())
        .map(|state: SharedModel, runner: Arc<Runner>| {
            warp::reply::json(&read_model(&state).summary(runner.metrics()))
        });

    let rerun_route = warp::path("rerun")
        .and(warp::post())
        .and(warp::body::json())
        .and(state_filter)
        .and(runner_filter)
        .and_then(
            |request: RerunRequest, state: SharedModel, runner: Arc<Runner>| async move {
                let seed = request
                    .seed
                    .unwrap_or_else(|| read_model(&state).seed.wrapping_add(1));
                let outcome =
                    tokio::task::spawn_blocking(move || runner.execute_with_seed(seed)).await;
                match outcome {
                    Ok(Ok(result)) => {
                        store(&state, &result);
                        log::info!("[bridge] rerun seed {} -> {}", seed, result.report.headline());
                        Ok::<_, warp::Rejection>(warp::reply::with_status(
                            warp::reply::json(&json!({
                                "status": "ok",
                                "seed": seed,
                                "passing": result.report.passing,
                                "total": result.report.total,
                            })),
                            StatusCode::OK,
                        ))
                    }
                    Ok(Err(err)) => {
                        log::error!("rerun error: {:#}", err);
                        Err(warp::reject::custom(RerunFailed))
                    }
                    Err(join_err) => {
                        log::error!("rerun task failed: {}", join_err);
                        Err(warp::reject::custom(RerunFailed))
                    }
                }
            },
        );

    run_route.or(checks_route).or(status_route).or(rerun_route)
}

/// Holds the latest published run and serves it over HTTP on demand.
pub struct GuiBridge {
    state: SharedModel,
    runner: Arc<Runner>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        Self {
            state: Arc::new(RwLock::new(VisualizationModel::default())),
            runner,
        }
    }

    /// Starts the HTTP server on a dedicated thread with its own runtime.
    pub fn serve(&self, addr: SocketAddr) {
        let filter = routes(self.state.clone(), self.runner.clone());
        thread::spawn(move || match Builder::new_current_thread().enable_all().build() {
            Ok(runtime) => runtime.block_on(warp::serve(filter).run(addr)),
            Err(err) => log::error!("failed to build bridge runtime: {}", err),
        });
    }

    pub fn publish(&self, result: &WorkflowResult) {
        store(&self.state, result);
        println!(
            "[GUI] run seed {}: {} steps, {} components, {}",
            result.seed,
            result.run.time().len(),
            result.run.components().len(),
            result.report.headline()
        );
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        read_model(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::WorkflowConfig;

    fn runner() -> Arc<Runner> {
        Arc::new(Runner::new(WorkflowConfig::default()))
    }

    #[test]
    fn gui_bridge_updates_state() {
        let runner = runner();
        let gui = GuiBridge::new(runner.clone());
        assert!(gui.snapshot().run.is_none());

        let result = runner.execute().unwrap();
        gui.publish(&result);
        let snapshot = gui.snapshot();
        assert!(Arc::ptr_eq(snapshot.run.as_ref().unwrap(), &result.run));
        assert_eq!(snapshot.report.unwrap().passing, result.report.passing);
    }

    #[tokio::test]
    async fn status_route_reports_field_range_after_publish() {
        let runner = runner();
        let state = SharedModel::default();
        store(&state, &runner.execute().unwrap());
        let filter = routes(state, runner);
        let resp = warp::test::request()
            .method("GET")
            .path("/status")
            .reply(&filter)
            .await;
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["total"], 4);
        assert_eq!(body["metrics"]["runs"], 1);
        assert!(body["field_range"][0].as_f64().unwrap() >= 24.5);
    }

    #[tokio::test]
    async fn status_route_answers_while_rerun_is_in_flight() {
        let state = SharedModel::default();
        let filter = routes(state.clone(), runner());
        let (rerun, status) = tokio::join!(
            warp::test::request()
                .method("POST")
                .path("/rerun")
                .json(&json!({"seed": 3}))
                .reply(&filter),
            warp::test::request()
                .method("GET")
                .path("/status")
                .reply(&filter),
        );
        assert_eq!(status.status(), StatusCode::OK);
        assert_eq!(rerun.status(), StatusCode::OK);
        assert_eq!(read_model(&state).seed, 3);
    }

    #[tokio::test]
    async fn failed_rerun_is_rejected_and_leaves_state_untouched() {
        let mut config = WorkflowConfig::default();
        config.scenario.components.clear();
        let state = SharedModel::default();
        let filter = routes(state.clone(), Arc::new(Runner::new(config)));
        let resp = warp::test::request()
            .method("POST")
            .path("/rerun")
            .json(&json!({"seed": 4}))
            .reply(&filter)
            .await;
        assert!(resp.status().is_server_error());
        assert!(read_model(&state).run.is_none());
    }

    #[tokio::test]
    async fn checks_route_is_pending_until_published() {
        let state = SharedModel::default();
        let filter = routes(state, runner());
        let resp = warp::test::request()
            .method("GET")
            .path("/checks")
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn rerun_replaces_published_run() {
        let state = SharedModel::default();
        let filter = routes(state.clone(), runner());

        let resp = warp::test::request()
            .method("POST")
            .path("/rerun")
            .json(&json!({"seed": 11}))
            .reply(&filter)
            .await;
        assert_eq!(resp.status(), StatusCode::OK);
        let first = read_model(&state).run.unwrap();
        assert_eq!(read_model(&state).seed, 11);

        let resp = warp::test::request()
            .method("GET")
            .path("/checks")
            .reply(&filter)
            .await;
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["total"], 4);
        assert_eq!(body["results"][2]["status"], "warn");

        warp::test::request()
            .method("POST")
            .path("/rerun")
            .json(&json!({}))
            .reply(&filter)
            .await;
        let model = read_model(&state);
        assert_eq!(model.seed, 12);
        assert!(!Arc::ptr_eq(&first, model.run.as_ref().unwrap()));
    }
}
