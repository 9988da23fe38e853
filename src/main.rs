use anyhow::{Context, Result};
use clap::{App, Arg};
use gradient_colormap::{
    colorize_byte, table, ColormapOptions, Gradient, PaletteRegistry, Preset,
};
use log::*;
use std::io;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

fn main() -> Result<()> {
    let matches = App::new(NAME)
        .version(VERSION)
        .author(AUTHOR)
        .about("Map 8-bit samples to RGB through a gradient colormap")
        .arg(
            Arg::with_name("VALUES")
                .help("Byte values to color, 0-255 (all of them when omitted)")
                .multiple(true)
                .index(1),
        )
        .arg(
            Arg::with_name("colormap")
                .short("c")
                .long("colormap")
                .takes_value(true)
                .help("Name of a bundled colormap"),
        )
        .arg(
            Arg::with_name("table")
                .short("t")
                .long("table")
                .takes_value(true)
                .conflicts_with("colormap")
                .help("CSV file with stops as position,r0,g0,b0,r1,g1,b1 (.gz accepted)"),
        )
        .arg(
            Arg::with_name("strict")
                .long("strict")
                .requires("table")
                .help("Reject tables with out of order or non-finite positions"),
        )
        .arg(
            Arg::with_name("list")
                .short("l")
                .long("list")
                .help("List the bundled colormaps and exit"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .help("Silence all output"),
        )
        .get_matches();

    let verbose = matches.occurrences_of("verbose") as usize;
    let quiet = matches.is_present("quiet");
    stderrlog::new()
        .module(module_path!())
        .quiet(quiet)
        .verbosity(verbose)
        .init()
        .context("Could not initialize logging")?;

    if matches.is_present("list") {
        for preset in Preset::ALL {
            println!("{}", preset);
        }
        return Ok(());
    }

    let registry = PaletteRegistry::builtin()?;
    let gradient = match matches.value_of("table") {
        Some(path) => {
            let table = table::load_table(path)
                .with_context(|| format!("Could not read colormap table '{}'", path))?;
            if matches.is_present("strict") {
                Gradient::strict(table)?
            } else {
                Gradient::new(table)?
            }
        }
        None => ColormapOptions::new(matches.value_of("colormap")).resolve(&registry)?,
    };

    let values = match matches.values_of("VALUES") {
        Some(values) => values
            .map(|s| {
                s.parse::<u8>()
                    .with_context(|| format!("'{}' is not a value between 0 and 255", s))
            })
            .collect::<Result<Vec<u8>>>()?,
        None => (0..=255).collect(),
    };
    info!("Coloring {} values", values.len());

    let mut writer = csv::Writer::from_writer(io::stdout());
    writer.write_record(&["value", "r", "g", "b"])?;
    for value in values {
        let [r, g, b] = colorize_byte(&gradient, value)
            .with_context(|| format!("Could not color value {}", value))?;
        writer.serialize((value, r, g, b))?;
    }
    writer.flush()?;
    Ok(())
}
