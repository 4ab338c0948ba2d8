// main.rs
//
// Command line front end: read a font file, extrude the given text and write
// the result as an STL file.

use anyhow::{Context, Result, bail};
use simple_logger::SimpleLogger;
use std::fs;
use textrude::float_types::Real;
use textrude::font::FontLibrary;
use textrude::io::stl::DEFAULT_HEADER;
use textrude::text::{Kerning, TextOptions, text_mesh};

/// `--kerning 2` is a constant, `--kerning 1,0,-2.5` a per-glyph sequence.
fn parse_kerning(value: &str) -> Result<Kerning> {
    if value.contains(',') {
        let values = value
            .split(',')
            .map(|v| v.trim().parse::<Real>().with_context(|| format!("invalid kerning value `{v}`")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Kerning::Sequence(values))
    } else {
        let value = value
            .trim()
            .parse::<Real>()
            .with_context(|| format!("invalid kerning value `{value}`"))?;
        Ok(Kerning::Constant(value))
    }
}

fn cli() -> clap::Command {
    clap::Command::new("textrude")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extrude TrueType text into a printable STL solid")
        .arg(
            clap::Arg::new("font")
                .help("TrueType font file")
                .required(true)
                .index(1),
        )
        .arg(
            clap::Arg::new("text")
                .help("The text to extrude")
                .required(true)
                .index(2),
        )
        .arg(
            clap::Arg::new("output")
                .help("Output file")
                .short('o')
                .long("output")
                .default_value("out.stl"),
        )
        .arg(
            clap::Arg::new("size")
                .help("Font size")
                .long("size")
                .value_parser(clap::value_parser!(Real)),
        )
        .arg(
            clap::Arg::new("depth")
                .help("Extrusion depth")
                .long("depth")
                .value_parser(clap::value_parser!(Real)),
        )
        .arg(
            clap::Arg::new("kerning")
                .help("Extra spacing per glyph: a number, or a comma separated list")
                .long("kerning")
                .allow_hyphen_values(true)
                .value_parser(parse_kerning),
        )
        .arg(
            clap::Arg::new("segments")
                .help("Line segments per curve")
                .long("segments")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            clap::Arg::new("no-center")
                .help("Keep glyphs at their layout position instead of centering")
                .long("no-center")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("ascii")
                .help("Write ASCII STL instead of binary")
                .long("ascii")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("header")
                .help("Binary STL header text (solid name for ASCII)")
                .long("header"),
        )
        .arg(
            clap::Arg::new("debug")
                .help("Enable debug logging")
                .short('d')
                .long("debug")
                .action(clap::ArgAction::SetTrue),
        )
}

/// Layout options from the parsed arguments, defaults where a flag is absent.
fn options(matches: &clap::ArgMatches) -> TextOptions {
    let mut options = TextOptions::default().with_center(!matches.get_flag("no-center"));
    if let Some(&size) = matches.get_one::<Real>("size") {
        options.size = size;
    }
    if let Some(&depth) = matches.get_one::<Real>("depth") {
        options.depth = depth;
    }
    if let Some(&segments) = matches.get_one::<usize>("segments") {
        options.curve_segments = segments;
    }
    if let Some(kerning) = matches.get_one::<Kerning>("kerning") {
        options.kerning = kerning.clone();
    }
    options
}

fn main() -> Result<()> {
    let matches = cli().get_matches();

    let level = if matches.get_flag("debug") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    SimpleLogger::new().with_level(level).init()?;

    let (Some(font_path), Some(text), Some(output)) = (
        matches.get_one::<String>("font"),
        matches.get_one::<String>("text"),
        matches.get_one::<String>("output"),
    ) else {
        bail!("font, text and output are required");
    };
    let options = options(&matches);

    let mut fonts = FontLibrary::new();
    let data = fs::read(font_path).with_context(|| format!("could not read font {font_path}"))?;
    fonts.insert(font_path.as_str(), data);
    let font = fonts.font(font_path)?;

    let mesh = text_mesh(&font, text, &options)?;
    if let Some(aabb) = mesh.bounding_box() {
        let size = aabb.extents();
        log::info!("mesh spans {:.2} x {:.2} x {:.2}", size.x, size.y, size.z);
    }

    let header = matches
        .get_one::<String>("header")
        .map_or(DEFAULT_HEADER, String::as_str);
    let bytes = if matches.get_flag("ascii") {
        mesh.to_stl_ascii(header)?.into_bytes()
    } else {
        mesh.to_stl_binary(header)?
    };
    fs::write(output, &bytes).with_context(|| format!("could not write {output}"))?;
    log::info!("wrote {} bytes to {output}", bytes.len());

    Ok(())
}
