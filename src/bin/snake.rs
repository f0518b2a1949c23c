use std::sync::{Arc, Mutex};

use color_eyre::Result;
use fingersnake::{
    api::{
        models::{Frame, FrameState, Status},
        types::APIVersion,
    },
    game::{config::Environment, Session, Sprite},
};
use log::{error, info};
use warp::{http::Method, Filter};

const NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

#[derive(Debug)]
struct InternalError;
impl warp::reject::Reject for InternalError {}

type SharedSession = Arc<Mutex<Session>>;

/// Runs `apply` against the locked session and replies with the resulting
/// state.
fn with_locked<F>(session: &SharedSession, apply: F) -> Result<warp::reply::Json, warp::Rejection>
where
    F: FnOnce(&mut Session) -> FrameState,
{
    session
        .lock()
        .map(|mut session| warp::reply::json(&apply(&mut session)))
        .map_err(|e| {
            error!("session lock poisoned: {}", e);
            warp::reject::custom(InternalError)
        })
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    #[cfg(debug_assertions)]
    info!("running in debug mode");

    #[cfg(not(debug_assertions))]
    info!("running in release mode");

    let environment = Environment::load()?;
    let Environment {
        frame_width,
        frame_height,
        ..
    } = environment;

    let sprite = Sprite::load(&environment.sprite)?;
    let config = environment.config();
    info!(
        "{}x{} frames, food spawns in {:?}, sprite {} ({}x{})",
        frame_width,
        frame_height,
        config.feed.spawn,
        environment.sprite,
        sprite.width,
        sprite.height
    );

    let session: SharedSession = Arc::new(Mutex::new(Session::new(config, &sprite)));
    let session = warp::any().map(move || Arc::clone(&session));

    let cors = warp::cors()
        .allow_method(Method::GET)
        .allow_method(Method::POST)
        .allow_header("content-type")
        .allow_any_origin();

    let logging = warp::log(NAME);

    let healthz = warp::get().and(warp::path::end().map(move || {
        warp::reply::json(&Status {
            apiversion: APIVersion::One,
            author: AUTHOR.to_owned(),
            version: VERSION.to_owned(),
            frame_width,
            frame_height,
        })
    }));

    let start = warp::post()
        .and(warp::path("start"))
        .and(session.clone())
        .and_then(|session: SharedSession| async move {
            with_locked(&session, |session| {
                session.restart();
                session.state()
            })
        });

    let do_frame = warp::post()
        .and(warp::path("frame"))
        .and(warp::body::json())
        .and(session)
        .and_then(|frame: Frame, session: SharedSession| async move {
            with_locked(&session, |session| session.frame(frame.fingertip))
        });

    let api = healthz.or(start).or(do_frame).with(cors).with(logging);

    warp::serve(api).run(([0, 0, 0, 0], 6502)).await;

    Ok(())
}
