use std::io;

use clap::Parser;
use env_logger::{Env, Target};
use log::info;

use magic_chess::config::EngineConfig;
use magic_chess::moves::attack_tables::init_attack_tables;
use magic_chess::protocol::command_loop::run_stdio_loop;

/// Chess engine speaking a line-oriented protocol on stdin/stdout.
#[derive(Debug, Parser)]
#[command(name = "magic_chess", version, about)]
struct Args {
    /// Default search depth when a request names none.
    #[arg(long)]
    depth: Option<u8>,

    /// Default time budget per move request, in milliseconds.
    #[arg(long = "movetime-ms")]
    movetime_ms: Option<u64>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // stdout carries protocol responses only.
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(Target::Stderr)
        .init();

    let config = EngineConfig::from_env().with_overrides(args.depth, args.movetime_ms);
    info!("starting with {config:?}");

    init_attack_tables();
    run_stdio_loop(config)
}
