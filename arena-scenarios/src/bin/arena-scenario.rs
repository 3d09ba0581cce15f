/*
 *  SPDX-License-Identifier: Apache-2.0 OR MIT
 *  © 2020-2022 ETH Zurich and other contributors, see AUTHORS.txt for details
 */

//! Builds the world of a scenario and dumps what every agent observes, earns and does.

use std::{error::Error, fs, io, io::Write};

use clap::{App, Arg};

use arena_core::seeded_rng;
use arena_scenarios::{build_scenario, snapshot_world, write_snapshot, Config};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(None, log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = App::new("Arena scenario")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("config")
                .required(true)
                .help("Sets config file path, - for stdin"),
        )
        .arg(
            Arg::with_name("seed")
                .required(false)
                .takes_value(true)
                .value_name("seed")
                .long("seed")
                .validator(|str| {
                    str.parse::<u64>()
                        .map(|_| ())
                        .map_err(|e| format!("Invalid seed: {e}"))
                })
                .help("Overrides the seed of the config"),
        )
        .arg(
            Arg::with_name("set")
                .required(false)
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .short("s")
                .long("set")
                .validator(|str| {
                    if str.contains('=') {
                        Ok(())
                    } else {
                        Err("Invalid format, should be \"some.path=value\"".to_owned())
                    }
                })
                .help("Manually override a value in the config"),
        )
        .arg(
            Arg::with_name("output")
                .required(false)
                .takes_value(true)
                .value_name("file")
                .short("o")
                .long("output")
                .help("Writes the snapshot to a file instead of stdout"),
        )
        .get_matches();

    let config_path = matches.value_of("config").unwrap_or("-");
    let overrides = matches.values_of("set").into_iter().flatten();
    let mut config = Config::load(config_path, overrides)?;
    if let Some(seed) = matches.value_of("seed") {
        config.seed = Some(seed.parse()?);
    }

    let (mut rng, seed) = seeded_rng(config.seed);
    log::info!("using seed {seed}");

    let scenario = build_scenario(&config.scenario);
    let mut world = scenario.make_world(&mut rng)?;
    let snapshot = snapshot_world(scenario.as_ref(), &mut world, seed);

    match matches.value_of("output") {
        Some(path) => {
            let mut writer = io::BufWriter::new(fs::File::create(path)?);
            write_snapshot(&mut writer, &snapshot)?;
            writer.flush()?;
            log::info!("snapshot written to {path}");
        }
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            write_snapshot(&mut stdout, &snapshot)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}
