use image::Rgb;
use nalgebra::Vector3;

// 255.999, not 256.0: a channel of exactly 1.0 must still land in bucket 255
#[allow(clippy::many_single_char_names)]
pub fn vec3_to_rgb(v: Vector3<f64>) -> Rgb<u8> {
    let r = (v[0] * 255.999) as u8;
    let g = (v[1] * 255.999) as u8;
    let b = (v[2] * 255.999) as u8;
    Rgb([r, g, b])
}
