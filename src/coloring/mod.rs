mod gradient;

use nalgebra::Vector3;

pub use self::gradient::GradientColors;

pub trait ColoringMethod {
    fn color_for_pixel(&self, x: u16, y: u16) -> Vector3<f64>;
}
