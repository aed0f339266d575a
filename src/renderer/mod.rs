use std::io::{self, Write};

use image::Rgb;

pub fn write_header(w: &mut impl Write, width: u16, height: u16) -> io::Result<()> {
    write!(w, "P3\n{} {}\n255\n", width, height)
}

pub fn write_color(w: &mut impl Write, color: Rgb<u8>) -> io::Result<()> {
    writeln!(w, "{} {} {}", color.0[0], color.0[1], color.0[2])
}
