use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{App, Arg, ArgMatches};
use env_logger::Env;
use fastinv::{last_known_name, ConvertOptions, Converter, SchemaProfile, SlotPolicy, Value};
use flate2::read::GzDecoder;
use log::info;

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn options(args: &ArgMatches) -> Result<ConvertOptions> {
    let mut options = match args.value_of("config") {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => ConvertOptions::default(),
    };

    if args.is_present("legacy-schema") {
        options.schema = SchemaProfile::legacy();
    }
    if args.is_present("skip-invalid") {
        options.slot_policy = SlotPolicy::Skip;
    }
    Ok(options)
}

/// `<lastKnownName>.json`, or the player file's stem when Bukkit never
/// recorded a name.
fn default_output(player: &Path, root: &Value) -> Result<PathBuf> {
    let name = match last_known_name(root)? {
        Some(name) => name.to_owned(),
        None => player
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .ok_or("player path has no file name")?,
    };
    Ok(PathBuf::from(format!("{}.json", name)))
}

fn convert(args: &ArgMatches) -> Result<()> {
    let player = Path::new(args.value_of("PLAYER").ok_or("missing player file")?);
    let world = args.value_of("world").unwrap_or("world");
    let options = options(args)?;

    let file = File::open(player)?;
    let root: Value = fastnbt::from_reader(GzDecoder::new(BufReader::new(file)))?;

    let snapshot = Converter::new(options).player(&root, world)?;

    let out = match args.value_of("output") {
        Some(out) => PathBuf::from(out),
        None => default_output(player, &root)?,
    };

    let mut writer = BufWriter::new(File::create(&out)?);
    if args.is_present("pretty") {
        serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    } else {
        serde_json::to_writer(&mut writer, &snapshot)?;
    }
    writer.flush()?;

    info!(
        "wrote {} ({:?}, {} inventory slots)",
        out.display(),
        snapshot.game_mode,
        snapshot.profile.inventory_contents.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let matches = App::new("player-convert")
        .about("Convert a player .dat file into Multiverse-Inventories JSON")
        .arg(Arg::with_name("PLAYER").takes_value(true).required(true))
        .arg(
            Arg::with_name("world")
                .long("world")
                .short("w")
                .takes_value(true)
                .required(false)
                .default_value("world"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .short("o")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("config")
                .long("config")
                .short("c")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("legacy-schema")
                .long("legacy-schema")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("skip-invalid")
                .long("skip-invalid")
                .takes_value(false)
                .required(false),
        )
        .arg(
            Arg::with_name("pretty")
                .long("pretty")
                .takes_value(false)
                .required(false),
        )
        .get_matches();

    convert(&matches)
}
