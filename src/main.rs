mod coloring;
mod generator;
mod params;
mod renderer;
mod utils;

use std::io::{self, BufWriter, Write};
use std::process;

use crate::coloring::GradientColors;
use crate::params::Params;

fn main() {
    let params = Params::default();
    let coloring = GradientColors::new(params.width, params.height);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut image_out = BufWriter::new(stdout.lock());
    let mut diag = stderr.lock();

    if let Err(err) = generator::generate(&params, &coloring, &mut image_out, &mut diag) {
        let _ = writeln!(diag, "error writing image: {}", err);
        process::exit(1);
    }
}
