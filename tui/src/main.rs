mod args;
mod tui;

use std::{error::Error, process, time::Duration};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = args::Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn run(args: args::Args) -> Result<(), Box<dyn Error>> {
    let period = Duration::from_millis(args.config.period);
    let mut world = args.config.world()?;
    if args.no_tui {
        for _ in 0..args.steps {
            world.step();
        }
        print!("{}", world);
        Ok(())
    } else {
        tui::run(world, period, args.alive_color, args.dead_color).map_err(Into::into)
    }
}
