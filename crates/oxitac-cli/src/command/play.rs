use std::io::{self, BufRead, Write as _};

use oxitac_ai::{MinimaxMovePolicy, MovePolicy, RandomMovePolicy};
use oxitac_engine::{GameSession, Mark, MatchStats, MoveError, SessionState};

use crate::ui;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Play against another human instead of the AI
    #[clap(long)]
    two_players: bool,
    /// Mark that moves first
    #[clap(long, default_value = "x")]
    first: Mark,
    /// Mark the AI plays (ignored with --two-players)
    #[clap(long, default_value = "o")]
    ai_mark: Mark,
    /// AI difficulty
    #[clap(long, value_enum, default_value_t = AiLevel::Optimal)]
    ai_level: AiLevel,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            two_players: false,
            first: Mark::X,
            ai_mark: Mark::O,
            ai_level: AiLevel::Optimal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum AiLevel {
    /// Uniformly random legal moves
    Random,
    /// Perfect play via exhaustive search
    Optimal,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        two_players,
        first,
        ai_mark,
        ai_level,
    } = arg;

    let mut policy: Box<dyn MovePolicy> = match ai_level {
        AiLevel::Random => Box::new(RandomMovePolicy::new()),
        AiLevel::Optimal => Box::new(MinimaxMovePolicy),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stats = MatchStats::new();
    let mut session = GameSession::new(*first);

    loop {
        let outcome = play_round(&mut input, &mut session, policy.as_mut(), *two_players, *ai_mark)?;
        stats.record_round(outcome);
        println!("{}", ui::render_stats(&stats));
        if !prompt_yes_no(&mut input, "Play again? (y/n): ")? {
            break;
        }
        session.reset(*first);
    }
    Ok(())
}

fn play_round(
    input: &mut impl BufRead,
    session: &mut GameSession,
    policy: &mut dyn MovePolicy,
    two_players: bool,
    ai_mark: Mark,
) -> anyhow::Result<SessionState> {
    while session.state().is_in_progress() {
        println!("{}", ui::render_board(session.board()));
        let mark = session.turn();
        if !two_players && mark == ai_mark {
            // The loop guard above means the board is never terminal here
            let (row, col) = policy.select_move(session.board(), mark)?;
            println!("The AI ({mark}) plays at {row} {col}.");
            session.play(row, col)?;
        } else {
            prompt_human_move(input, session)?;
        }
    }

    println!("{}", ui::render_board(session.board()));
    match session.state() {
        SessionState::Won(mark) => println!("Player {mark} wins!"),
        SessionState::Drawn => println!("It's a draw!"),
        SessionState::InProgress => unreachable!("round loop exited while in progress"),
    }
    Ok(session.state())
}

/// Prompts until the current player enters a move the session accepts.
fn prompt_human_move(input: &mut impl BufRead, session: &mut GameSession) -> anyhow::Result<()> {
    loop {
        print!(
            "Player {}, enter row and column (e.g. 1 1): ",
            session.turn()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            anyhow::bail!("input closed before the round finished");
        }
        let Some((row, col)) = parse_coordinates(&line) else {
            println!("Invalid input. Enter two numbers between 0 and 2.");
            continue;
        };
        match session.play(row, col) {
            Ok(_) => return Ok(()),
            Err(err @ MoveError::Place(_)) => println!("Invalid move: {err}. Try again."),
            Err(err) => return Err(err.into()),
        }
    }
}

fn parse_coordinates(line: &str) -> Option<(usize, usize)> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn prompt_yes_no(input: &mut impl BufRead, prompt: &str) -> anyhow::Result<bool> {
    loop {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // Closed input means nobody is left to answer
            return Ok(false);
        }
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer y or n."),
        }
    }
}
