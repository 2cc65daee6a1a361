//! Subcommand handlers for lunactl.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use luna_common::{
    compute_score, respond_to_payload, submission_feedback, ChatTurn, SessionContext,
    SleepObservation, YesNo,
};

use crate::config::Config;
use crate::logging;
use crate::output;
use crate::repl;
use crate::state::StatePaths;

/// Score a nightly entry and store it as the session's latest context.
pub fn score(
    config: &Config,
    hours: f64,
    disturbances: u32,
    temperature: f64,
    light: &str,
    noise: &str,
) -> Result<()> {
    let light: YesNo = light.parse()?;
    let noise: YesNo = noise.parse()?;
    let observation = SleepObservation::new(hours, disturbances, temperature, light, noise)?;

    let score = compute_score(&observation);
    let ctx = SessionContext::new(score, observation);

    let paths = state_paths(config)?;
    paths.store_session(&ctx)?;

    output::print_score(&ctx, &submission_feedback(score));
    Ok(())
}

/// One-shot question: reply, log the turn, exit.
pub fn ask(config: &Config, message: &str, seed: Option<u64>) -> Result<()> {
    let paths = state_paths(config)?;
    let mut rng = rng_from(seed.or(config.default_seed));

    let payload = paths.load_session_payload();
    let reply = respond_to_payload(message, payload.as_deref(), &mut rng);
    output::print_reply(&reply);

    let turn = ChatTurn::record(message, reply);
    logging::append_turn(&paths.transcript_file(), &turn)?;
    Ok(())
}

/// Interactive chat session.
pub fn chat(config: &Config, seed: Option<u64>) -> Result<()> {
    let paths = state_paths(config)?;
    repl::run(&paths, rng_from(seed.or(config.default_seed)))
}

/// List every topic the knowledge base can answer.
pub fn topics() -> Result<()> {
    output::print_topics();
    Ok(())
}

fn state_paths(config: &Config) -> Result<StatePaths> {
    StatePaths::resolve(config.state_dir.as_deref())
        .context("no usable state directory (set LUNA_STATE_DIR or HOME)")
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
