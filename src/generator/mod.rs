use std::io::{self, Write};

use crate::{coloring::ColoringMethod, params::Params, renderer, utils::vec3_to_rgb};

pub fn generate<C: ColoringMethod>(
    params: &Params,
    coloring: &C,
    image_out: &mut impl Write,
    diag: &mut impl Write,
) -> io::Result<()> {
    renderer::write_header(image_out, params.width, params.height)?;

    for y in 0..params.height {
        report_scanlines_remaining(diag, params.height - y);
        for x in 0..params.width {
            let color = coloring.color_for_pixel(x, y);
            renderer::write_color(image_out, vec3_to_rgb(color))?;
        }
    }
    image_out.flush()?;
    report_done(diag);

    Ok(())
}

// progress failures must not abort the render, so results are discarded here
fn report_scanlines_remaining(diag: &mut impl Write, remaining: u16) {
    let _ = write!(diag, "\rScanlines remaining: {}", remaining);
    let _ = diag.flush();
}

fn report_done(diag: &mut impl Write) {
    // trailing spaces overwrite the longest "Scanlines remaining" update
    let _ = writeln!(diag, "\rDone.        ");
}
