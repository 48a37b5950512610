//! Parsing command-line arguments.

use clap::{crate_description, crate_name, crate_version, value_parser, Arg, ArgAction, Command};
use crossterm::style::Color;
use log::warn;
use rcellauto_lib::{Config, PRESETS};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) alive_color: Color,
    pub(crate) dead_color: Color,
    pub(crate) no_tui: bool,
    pub(crate) steps: u32,
}

/// Parses a color name, falling back to `default` with a warning when the
/// name is unknown.
fn parse_color(name: Option<&String>, default: Color) -> Color {
    match name {
        None => default,
        Some(name) => Color::try_from(name.as_str()).unwrap_or_else(|_| {
            warn!("unknown color '{}', using the default", name);
            default
        }),
    }
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, clap::Error> {
        let rulesets = PRESETS.map(|preset| preset.name()).join(", ");
        let matches = Command::new(crate_name!())
            .version(crate_version!())
            .about(crate_description!())
            .long_about(
                "A life-like cellular automaton for the terminal.\n\
                 \n\
                 The grid is filled at random and advanced one generation per \
                 tick. Press [r] or [space] to randomize the grid again, \
                 [q] or [Esc] to quit.",
            )
            .arg(
                Arg::new("X")
                    .help("Width of the grid")
                    .index(1)
                    .default_value("28")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("Y")
                    .help("Height of the grid")
                    .index(2)
                    .default_value("28")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("RULESET")
                    .help("Selects a named ruleset")
                    .long_help(format!(
                        "Selects a named ruleset\n\
                         One of: {}.\n\
                         An unknown name emits a warning and keeps 'life'.\n",
                        rulesets
                    ))
                    .short('r')
                    .long("ruleset"),
            )
            .arg(
                Arg::new("BIRTH")
                    .help("Custom ruleset - neighbor counts required for birth (default: 3)")
                    .long_help(
                        "Custom ruleset - neighbor counts required for birth\n\
                         A string of digits between 0 and 8; other characters \
                         are skipped with a warning. Overrides the birth half \
                         of the ruleset.\n",
                    )
                    .short('b')
                    .long("birth"),
            )
            .arg(
                Arg::new("SURVIVAL")
                    .help("Custom ruleset - neighbor counts required for survival (default: 23)")
                    .long_help(
                        "Custom ruleset - neighbor counts required for survival\n\
                         A string of digits between 0 and 8; other characters \
                         are skipped with a warning. Overrides the survival \
                         half of the ruleset.\n",
                    )
                    .short('s')
                    .long("survival"),
            )
            .arg(
                Arg::new("DENSITY")
                    .help("Percentage of live cells in the initial random grid")
                    .long("density")
                    .default_value("50")
                    .value_parser(value_parser!(u32).range(0..=100)),
            )
            .arg(
                Arg::new("RESET")
                    .help("Number of generations until the grid resets (default: never)")
                    .short('R')
                    .long("reset")
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                Arg::new("TIME")
                    .help("Time in ms between generations")
                    .short('t')
                    .long("time")
                    .default_value("250")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("ALIVE")
                    .help("Color of live cells")
                    .short('a')
                    .long("alive-color")
                    .value_name("COLOR"),
            )
            .arg(
                Arg::new("DEAD")
                    .help("Color of dead cells")
                    .short('d')
                    .long("dead-color")
                    .value_name("COLOR"),
            )
            .arg(
                Arg::new("NOTUI")
                    .help("Runs without the TUI and prints the final grid")
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("STEPS")
                    .help("Number of generations to run with --no-tui")
                    .long("steps")
                    .default_value("100")
                    .value_parser(value_parser!(u32)),
            )
            .try_get_matches()?;

        let width = *matches.get_one::<u64>("X").unwrap() as usize;
        let height = *matches.get_one::<u64>("Y").unwrap() as usize;
        let config = Config::new(width, height)
            .set_ruleset(matches.get_one::<String>("RULESET").cloned())
            .set_birth(matches.get_one::<String>("BIRTH").cloned())
            .set_survival(matches.get_one::<String>("SURVIVAL").cloned())
            .set_density(*matches.get_one::<u32>("DENSITY").unwrap())
            .set_reset(matches.get_one::<u32>("RESET").copied())
            .set_period(*matches.get_one::<u64>("TIME").unwrap());

        Ok(Self {
            config,
            alive_color: parse_color(matches.get_one::<String>("ALIVE"), Color::Green),
            dead_color: parse_color(matches.get_one::<String>("DEAD"), Color::Black),
            no_tui: matches.get_flag("NOTUI"),
            steps: *matches.get_one::<u32>("STEPS").unwrap(),
        })
    }
}
