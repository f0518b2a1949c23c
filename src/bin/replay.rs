use std::env;

use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};
use fingersnake::{
    api::models::FrameState,
    frames::{play, FrameSource, TraceSource},
    game::{config::Environment, Session, Sprite},
};
use log::{debug, info};
use reqwest::{blocking::Client, Url};

const USAGE: &str = "usage: replay <trace-file> [server-url]";

/// Keeps enough of the previous frame to log what changed.
#[derive(Default)]
struct Tally {
    frames:     u64,
    score:      u64,
    best_score: u64,
    game_overs: u64,
    over:       bool,
}

impl Tally {
    fn record(&mut self, state: &FrameState) {
        self.frames += 1;

        if state.score != self.score {
            info!("frame {}: score {}", self.frames, state.score);
        }
        if state.game_over && !self.over {
            self.game_overs += 1;
            info!("frame {}: game over", self.frames);
        }
        debug!(
            "frame {}: {} trail points, food at {}",
            self.frames,
            state.trail.len(),
            state.food.position
        );

        self.score = state.score;
        self.best_score = self.best_score.max(state.score);
        self.over = state.game_over;
    }

    fn summarise(&self) {
        info!(
            "replayed {} frames, best score {}, {} game overs",
            self.frames, self.best_score, self.game_overs
        );
    }
}

fn replay_local(source: &mut impl FrameSource) -> Result<Tally> {
    let environment = Environment::load()?;
    let sprite = Sprite::load(&environment.sprite)?;
    let mut session = Session::new(environment.config(), &sprite);

    let mut tally = Tally::default();
    play(source, &mut session, |state| tally.record(state))?;
    Ok(tally)
}

fn replay_remote(source: &mut impl FrameSource, server: &Url) -> Result<Tally> {
    let client = Client::new();
    let start = server.join("start")?;
    let frame_url = server.join("frame")?;

    let state: FrameState = client
        .post(start)
        .send()
        .and_then(|resp| resp.error_for_status())
        .and_then(|resp| resp.json())
        .wrap_err_with(|| format!("failed to start a game on {server}"))?;
    info!("started a game on {}, food at {}", server, state.food.position);

    let mut tally = Tally::default();
    while let Some(frame) = source.next_frame()? {
        let state: FrameState = client
            .post(frame_url.clone())
            .json(&frame)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json())
            .wrap_err_with(|| format!("server rejected frame {}", tally.frames + 1))?;
        tally.record(&state);
    }

    Ok(tally)
}

fn main() -> Result<()> {
    color_eyre::install()?;
    pretty_env_logger::init();

    let mut args = env::args().skip(1);
    let trace = args.next().ok_or_else(|| eyre!(USAGE))?;
    let mut source = TraceSource::open(&trace)?;

    let tally = match args.next() {
        Some(server) => {
            let server: Url = server.parse().wrap_err("invalid server url")?;
            replay_remote(&mut source, &server)?
        }
        None => replay_local(&mut source)?,
    };

    tally.summarise();

    Ok(())
}
