// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The command-line face of the carver: decode, resize, encode.

use std::process;

use clap::{App, Arg, ArgMatches};
use failure::{bail, err_msg};
use image::DynamicImage;
use log::debug;

use reseam::SeamCarver;

fn main() {
    env_logger::init();

    let matches = App::new("reseam")
        .version("0.1.0")
        .about("Content-aware width resizing")
        .arg(
            Arg::with_name("input")
                .help("The image to resize")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .short("w")
                .long("width")
                .takes_value(true)
                .help("Target width in pixels"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .default_value("out.png")
                .help("Where to write the result"),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the normalized energy map instead of carving"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("reseam: {}", e);
        process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let input = matches.value_of("input").unwrap();
    let output = matches.value_of("output").unwrap();

    // The engine is strict about its input; the boundary layer owns
    // format conversion.
    let decoded = image::open(input)?;
    let rgb = DynamicImage::ImageRgb8(decoded.to_rgb());
    let mut carver = SeamCarver::new(&rgb)?;

    if matches.is_present("energy") {
        carver.energy_image().save(output)?;
        return Ok(());
    }

    let target: u32 = matches
        .value_of("width")
        .ok_or_else(|| err_msg("--width is required unless --energy is given"))?
        .parse()?;
    if target == 0 {
        bail!("target width must be at least 1");
    }
    if target > carver.source_width() {
        bail!(
            "cannot grow past the source width of {} (a fresh engine has no removal history)",
            carver.source_width()
        );
    }

    let carved = carver.remove_seams(carver.source_width() - target);
    debug!(
        "carved {} columns down to {}",
        carver.source_width(),
        carver.current_width()
    );
    carved.save(output)?;
    Ok(())
}
