use rcellauto_lib::{Config, Error, Preset, Rule, State};
use std::error::Error as StdError;

#[test]
fn default() -> Result<(), Box<dyn StdError>> {
    let world = Config::default().world()?;
    assert_eq!(world.width(), 28);
    assert_eq!(world.height(), 28);
    assert_eq!(world.generation(), 0);
    assert_eq!(world.rule().to_string(), "B3/S23");
    Ok(())
}

#[test]
fn invalid_config() {
    assert_eq!(Config::new(0, 28).world(), Err(Error::NonPositiveError));
    assert_eq!(Config::new(28, 0).world(), Err(Error::NonPositiveError));
    assert_eq!(
        Config::default().set_density(101).world(),
        Err(Error::DensityError(101))
    );
}

#[test]
fn density_bounds() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(10, 7).set_density(0).world()?;
    assert!(world.cells().iter().all(|&c| c == State::Dead));
    world.randomize();
    assert_eq!(world.cell_count(), 0);

    let world = Config::new(10, 7).set_density(100).world()?;
    assert!(world.cells().iter().all(|&c| c == State::Alive));
    assert_eq!(world.cell_count(), 70);
    Ok(())
}

#[test]
fn block_is_a_still_life() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(8, 8).set_density(0).world()?;
    for coord in [(3, 3), (4, 3), (3, 4), (4, 4)] {
        world.set_cell(coord, State::Alive);
    }
    let before = world.to_string();
    world.step();
    assert_eq!(world.to_string(), before);
    assert_eq!(world.generation(), 1);
    Ok(())
}

#[test]
fn blinker_oscillates() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(5, 5).set_density(0).world()?;
    for coord in [(1, 2), (2, 2), (3, 2)] {
        world.set_cell(coord, State::Alive);
    }
    world.step();
    assert_eq!(
        world.to_string(),
        ".....\n\
         ..o..\n\
         ..o..\n\
         ..o..\n\
         .....\n"
    );
    world.step();
    assert_eq!(
        world.to_string(),
        ".....\n\
         .....\n\
         .ooo.\n\
         .....\n\
         .....\n"
    );
    Ok(())
}

#[test]
fn step_is_deterministic() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(16, 16).set_density(50).world()?;
    let mut replay = world.clone();
    world.step();
    replay.step();
    assert_eq!(world.cells(), replay.cells());
    Ok(())
}

#[test]
fn parse_digits() {
    let counts = Rule::parse_digits("238");
    for n in 0..=8 {
        assert_eq!(counts[n], n == 2 || n == 3 || n == 8);
    }

    // '9' and 'a' are skipped, the rest of the string still parses.
    let counts = Rule::parse_digits("2a8");
    assert_eq!(counts, Rule::parse_digits("28"));
    assert_eq!(Rule::parse_digits("9"), [false; 9]);
    assert_eq!(Rule::parse_digits(""), [false; 9]);
}

#[test]
fn presets() {
    assert_eq!(Preset::Life.rule().to_string(), "B3/S23");
    assert_eq!(Preset::Seeds.rule().to_string(), "B2/S");
    assert_eq!(Preset::DayAndNight.rule().to_string(), "B3678/S34678");
    assert_eq!(Preset::LifeWithoutDeath.rule().to_string(), "B3/S012345678");
    assert_eq!("highlife".parse::<Preset>(), Ok(Preset::HighLife));
    assert_eq!("day & night".parse::<Preset>(), Ok(Preset::DayAndNight));
    assert!("brian's brain".parse::<Preset>().is_err());
}

#[test]
fn unknown_ruleset_keeps_default() {
    let rule = Config::default()
        .set_ruleset(Some(String::from("brian's brain")))
        .rule();
    assert_eq!(rule, Rule::default());
}

#[test]
fn rule_precedence() {
    // The preset is applied first, then each digit-string override
    // independently replaces one of the two tables.
    let rule = Config::default()
        .set_ruleset(Some(String::from("seeds")))
        .set_survival(Some(String::from("23")))
        .rule();
    assert_eq!(rule.to_string(), "B2/S23");

    let rule = Config::default()
        .set_birth(Some(String::from("36")))
        .rule();
    assert_eq!(rule.to_string(), "B36/S23");
}

#[test]
fn seeds() -> Result<(), Box<dyn StdError>> {
    // Under B2/S every live cell dies, and a dead cell with exactly two
    // live neighbors is born.
    let mut world = Config::new(6, 6)
        .set_ruleset(Some(String::from("seeds")))
        .set_density(0)
        .world()?;
    world.set_cell((2, 2), State::Alive);
    world.set_cell((3, 2), State::Alive);
    world.step();
    assert_eq!(world.cell((2, 2)), State::Dead);
    assert_eq!(world.cell((3, 2)), State::Dead);
    // Cells above and below the pair saw both of its cells.
    assert_eq!(world.cell((2, 1)), State::Alive);
    assert_eq!(world.cell((3, 1)), State::Alive);
    assert_eq!(world.cell((2, 3)), State::Alive);
    assert_eq!(world.cell((3, 3)), State::Alive);
    Ok(())
}

#[test]
fn reset_threshold() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(12, 12)
        .set_density(50)
        .set_reset(Some(5))
        .world()?;
    for generation in 1..5 {
        world.step();
        assert_eq!(world.generation(), generation);
    }
    // The fifth step reaches the threshold and randomizes the grid again.
    world.step();
    assert_eq!(world.generation(), 0);
    Ok(())
}

#[test]
fn reset_threshold_zero() -> Result<(), Box<dyn StdError>> {
    // A threshold of 0 resets immediately after the very first step.
    let mut world = Config::new(12, 12).set_reset(Some(0)).world()?;
    world.step();
    assert_eq!(world.generation(), 0);
    Ok(())
}

#[test]
fn corner_neighbors() -> Result<(), Box<dyn StdError>> {
    // On an all-alive 3x3 grid, a corner cell sees 3 neighbors, an edge
    // cell 5, and the center 8; under B3/S23 only the corners survive.
    let mut world = Config::new(3, 3).set_density(100).world()?;
    world.step();
    // Corners survive on 3 neighbors, edges and the center die on 5 and 8.
    assert_eq!(
        world.to_string(),
        "o.o\n\
         ...\n\
         o.o\n"
    );
    Ok(())
}

#[test]
fn one_by_one_world() -> Result<(), Box<dyn StdError>> {
    // The smallest grid: the lone cell has no neighbors at all.
    let mut world = Config::new(1, 1).set_density(100).world()?;
    assert_eq!(world.cell((0, 0)), State::Alive);
    world.step();
    assert_eq!(world.cell((0, 0)), State::Dead);
    Ok(())
}
