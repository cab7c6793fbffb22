use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::{net::TcpListener, sync::broadcast};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::{
    clock::SystemClock,
    sampler::{CityFrame, CityLocation, CitySampler},
    scenario::{CityScenario, ScenarioError, ScenarioParams, ScenarioPatch},
    timeseries::{TimeSeriesBuffer, TimeSeriesData},
};

pub struct ServerConfig {
    pub scenario: CityScenario,
    pub host: String,
    pub port: u16,
}

struct AppState {
    broadcaster: broadcast::Sender<String>,
    sampler: Mutex<CitySampler>,
    latest_frame: Mutex<Option<CityFrame>>,
    series: Mutex<TimeSeriesBuffer>,
    scenario_name: String,
}

#[derive(Serialize)]
struct StateEnvelope {
    scenario: String,
    params: ScenarioParams,
    frame: Option<CityFrame>,
}

#[derive(Serialize)]
struct SeriesResponse {
    scenario: String,
    samples: Vec<TimeSeriesData>,
}

pub async fn run(config: ServerConfig) -> Result<()> {
    let ServerConfig {
        scenario,
        host,
        port,
    } = config;

    let city = CityLocation {
        name: scenario.city.name.clone(),
        lat: scenario.city.lat,
        lon: scenario.city.lon,
    };
    let sampler =
        CitySampler::new(city, Box::new(SystemClock)).with_scenario(scenario.params);

    let (tx, _) = broadcast::channel::<String>(512);
    let state = Arc::new(AppState {
        broadcaster: tx,
        sampler: Mutex::new(sampler),
        latest_frame: Mutex::new(None),
        series: Mutex::new(TimeSeriesBuffer::new(scenario.series_len)),
        scenario_name: scenario.name.clone(),
    });

    let refresh = Duration::from_secs(scenario.refresh_secs);
    let sampling_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(refresh);
        loop {
            interval.tick().await;
            sample_and_broadcast(&sampling_state);
        }
    });

    let router = Router::new()
        .route("/api/state", get(latest_state))
        .route("/api/series", get(series))
        .route("/api/events", get(stream_events))
        .route("/api/scenario", post(update_scenario))
        .route("/api/scenario/reset", post(reset_scenario))
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    println!(
        "[web] UrbanNexus API for '{}' live at http://{}:{} (Ctrl+C to stop)",
        scenario.name, host, port
    );

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    println!("[web] Shutting down...");
}

fn sample_and_broadcast(state: &AppState) {
    let frame = state.sampler.lock().expect("sampler lock poisoned").frame();
    {
        let mut series = state.series.lock().expect("series lock poisoned");
        series.push(CitySampler::series_point(&frame));
    }
    {
        let mut latest = state.latest_frame.lock().expect("latest frame lock poisoned");
        *latest = Some(frame.clone());
    }
    if let Ok(payload) = serde_json::to_string(&frame) {
        let _ = state.broadcaster.send(payload);
    }
}

async fn latest_state(State(state): State<Arc<AppState>>) -> Json<StateEnvelope> {
    let frame = state
        .latest_frame
        .lock()
        .expect("latest frame lock poisoned")
        .clone();
    let params = state.sampler.lock().expect("sampler lock poisoned").scenario();
    Json(StateEnvelope {
        scenario: state.scenario_name.clone(),
        params,
        frame,
    })
}

async fn series(State(state): State<Arc<AppState>>) -> Json<SeriesResponse> {
    let samples = state
        .series
        .lock()
        .expect("series lock poisoned")
        .samples()
        .to_vec();
    Json(SeriesResponse {
        scenario: state.scenario_name.clone(),
        samples,
    })
}

async fn update_scenario(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ScenarioPatch>,
) -> Result<Json<ScenarioParams>, (StatusCode, String)> {
    let merged = {
        let mut sampler = state.sampler.lock().expect("sampler lock poisoned");
        sampler.apply_patch(&patch).map_err(|err| match err {
            ScenarioError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            other => (StatusCode::INTERNAL_SERVER_ERROR, other.to_string()),
        })?
    };
    // slider moves refresh the dashboard immediately rather than waiting for
    // the next interval tick
    sample_and_broadcast(&state);
    Ok(Json(merged))
}

async fn reset_scenario(State(state): State<Arc<AppState>>) -> Json<ScenarioParams> {
    let params = {
        let mut sampler = state.sampler.lock().expect("sampler lock poisoned");
        sampler.reset_scenario();
        sampler.scenario()
    };
    sample_and_broadcast(&state);
    Json(params)
}

async fn stream_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.broadcaster.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|msg| match msg {
        Ok(payload) => Some(Ok(Event::default().data(payload))),
        Err(_) => None,
    });
    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(2))
            .text("keep-alive"),
    )
}
