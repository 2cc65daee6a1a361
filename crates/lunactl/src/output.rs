//! Terminal output - line-oriented formatting for lunactl.

use std::io::{self, Write};

use luna_common::knowledge::TOPICS;
use luna_common::{SessionContext, SubmissionFeedback};
use owo_colors::OwoColorize;

/// Print the fresh score with its feedback tier. Color bands follow the
/// tiers: green above 80, yellow above 50, red below.
pub fn print_score(ctx: &SessionContext, feedback: &SubmissionFeedback) {
    let score = format!("{}/100", ctx.score);
    let score_colored = if ctx.score > 80 {
        score.bright_green().to_string()
    } else if ctx.score > 50 {
        score.yellow().to_string()
    } else {
        score.bright_red().to_string()
    };

    println!();
    println!("Sleep score: {}", score_colored);
    println!();
    println!("{}", feedback.verdict.bold());
    println!("{}", feedback.summary);
    for item in feedback.advice {
        println!("  - {}", item);
    }
    println!();
    println!("Ask me to 'analyze my sleep' for the full breakdown.");
}

pub fn print_reply(reply: &str) {
    println!();
    for line in reply.lines() {
        println!("{}", line);
    }
    println!();
}

pub fn print_prompt() {
    print!("you> ");
    let _ = io::stdout().flush();
}

pub fn print_welcome() {
    println!();
    println!("{}", "Luna Sleep Assistant".bold());
    println!("Ask about sleep hygiene, or 'analyze my sleep' after scoring an entry.");
    println!("Type 'quit' to leave.");
}

pub fn print_topics() {
    println!("Supported topics:");
    for topic in TOPICS {
        println!("  - {}", topic.key);
    }
    println!();
    println!("Ask about any of these, or 'analyze my sleep' after scoring an entry.");
}
