//! revenue-stream: live revenue ticker for the terminal.
//!
//! Usage:
//!   revenue-stream                          # interactive prompt
//!   revenue-stream --amount 12,00,000 --ticks 60
//!   revenue-stream --ipc-mode --config stream.json
//!   revenue-stream --theme dark

mod render;
mod scheduler;

use anyhow::{bail, Result};
use revenue_core::{
    clock::ManualClock,
    command::{Command, Message},
    config::StreamConfig,
    engine::EngineState,
    event::StreamEvent,
    format::IndianLocale,
    session::Session,
    types::TICK_PERIOD,
};
use scheduler::TokioScheduler;
use std::env;
use std::io::{self, Write};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frontend {
    Interactive,
    Ipc,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let ticks: Option<u64> = arg_value(&args, "--ticks").and_then(|v| v.parse().ok());

    let mut config = match arg_value(&args, "--config") {
        Some(path) => StreamConfig::load(path)?,
        None => StreamConfig::default(),
    };
    if let Some(amount) = arg_value(&args, "--amount") {
        config.amount = Some(amount.to_string());
    }
    if let Some(theme) = arg_value(&args, "--theme") {
        config.theme = Some(theme.parse().map_err(anyhow::Error::msg)?);
    }

    if let Some(ticks) = ticks {
        return run_headless(&config, ticks);
    }

    let frontend = if ipc_mode { Frontend::Ipc } else { Frontend::Interactive };
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_live(config, frontend))
}

/// Drive the deterministic clock for `ticks` seconds and print a summary.
fn run_headless(config: &StreamConfig, ticks: u64) -> Result<()> {
    let clock = ManualClock::new();
    let mut session = Session::from_config(clock.clone(), IndianLocale, config)?;

    if session.engine().state() != EngineState::Running {
        let events = session.dispatch(Command::Start)?;
        if events.contains(&StreamEvent::StartRejected) {
            bail!("headless run needs a positive --amount");
        }
    }

    let span = TICK_PERIOD.saturating_mul(u32::try_from(ticks).unwrap_or(u32::MAX));
    for id in clock.advance(span) {
        session.dispatch(Message::Tick(id))?;
    }
    session.dispatch(Command::Pause)?;

    let snap = session.snapshot();
    println!("=== RUN SUMMARY ===");
    println!("  session:        {}", snap.session_id);
    println!("  annual revenue: ₹{}", snap.input);
    println!("  ticks run:      {}", snap.ticks);
    println!("  earned:         {}", snap.earned_display.as_deref().unwrap_or("-"));
    if let Some(rates) = &snap.rates {
        println!("  daily:          {}", rates.daily);
        println!("  hourly:         {}", rates.hourly);
        println!("  per minute:     {}", rates.per_minute);
    }
    Ok(())
}

/// Real-time loop: stdin commands and timer ticks, strictly one at a time.
async fn run_live(config: StreamConfig, frontend: Frontend) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut session = Session::from_config(TokioScheduler::new(tx), IndianLocale, &config)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = io::stdout();

    present(&mut stdout, frontend, &session, &[])?;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break }; // EOF
                let cmd = match parse_command(frontend, &line) {
                    Ok(cmd) => cmd,
                    Err(e) => {
                        report_error(&mut stdout, frontend, &e)?;
                        continue;
                    }
                };
                let events = session.dispatch(cmd)?;
                if session.should_quit() {
                    break;
                }
                present(&mut stdout, frontend, &session, &events)?;
            }
            Some(timer_id) = rx.recv() => {
                let events = session.dispatch(Message::Tick(timer_id))?;
                if events.is_empty() {
                    continue;
                }
                match frontend {
                    Frontend::Interactive => {
                        write!(stdout, "{}", render::render_status(&session.snapshot()))?;
                        stdout.flush()?;
                    }
                    Frontend::Ipc => present(&mut stdout, frontend, &session, &events)?,
                }
            }
        }
    }

    if frontend == Frontend::Interactive {
        writeln!(stdout)?;
    }
    Ok(())
}

fn parse_command(frontend: Frontend, line: &str) -> Result<Command> {
    match frontend {
        Frontend::Ipc => Ok(serde_json::from_str(line)?),
        Frontend::Interactive => Command::parse_line(line)
            .ok_or_else(|| anyhow::anyhow!("unrecognized input: {}", line.trim())),
    }
}

fn present(
    out: &mut impl Write,
    frontend: Frontend,
    session: &Session<TokioScheduler, IndianLocale>,
    events: &[StreamEvent],
) -> Result<()> {
    let snap = session.snapshot();
    match frontend {
        Frontend::Interactive => {
            writeln!(out)?;
            write!(out, "{}", render::render(&snap))?;
            write!(out, "> ")?;
        }
        Frontend::Ipc => {
            let reply = serde_json::json!({ "events": events, "state": snap });
            writeln!(out, "{reply}")?;
        }
    }
    out.flush()?;
    Ok(())
}

fn report_error(out: &mut impl Write, frontend: Frontend, err: &anyhow::Error) -> Result<()> {
    match frontend {
        Frontend::Interactive => write!(out, "  {err}\n> ")?,
        Frontend::Ipc => writeln!(out, "{}", serde_json::json!({ "error": err.to_string() }))?,
    }
    out.flush()?;
    Ok(())
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
