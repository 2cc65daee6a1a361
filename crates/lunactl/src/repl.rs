//! Chat REPL - interactive conversation with the responder.

use std::io::{self, BufRead};

use anyhow::Result;
use rand::rngs::StdRng;
use tracing::warn;

use luna_common::{respond_to_payload, ChatTurn};

use crate::logging;
use crate::output;
use crate::state::StatePaths;

/// Run the conversation loop until EOF or an explicit quit.
pub fn run(paths: &StatePaths, mut rng: StdRng) -> Result<()> {
    output::print_welcome();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        output::print_prompt();

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(err)) => {
                warn!(%err, "failed to read input line");
                continue;
            }
            None => break,
        };

        if input.is_empty() {
            continue;
        }
        if matches!(input.as_str(), "quit" | "exit") {
            break;
        }

        // Re-read the payload each turn so a `lunactl score` run in another
        // terminal is picked up mid-conversation.
        let payload = paths.load_session_payload();
        let reply = respond_to_payload(&input, payload.as_deref(), &mut rng);
        output::print_reply(&reply);

        let turn = ChatTurn::record(input, reply);
        if let Err(err) = logging::append_turn(&paths.transcript_file(), &turn) {
            warn!(%err, "failed to append chat transcript");
        }
    }

    println!("Sleep well!");
    Ok(())
}
