use super::ColoringMethod;

use nalgebra::Vector3;

pub struct GradientColors {
    width: u16,
    height: u16,
}

impl GradientColors {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl ColoringMethod for GradientColors {
    fn color_for_pixel(&self, x: u16, y: u16) -> Vector3<f64> {
        let r = x as f64 / (self.width - 1) as f64;
        let g = y as f64 / (self.height - 1) as f64;
        Vector3::new(r, g, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_span_the_unit_square() {
        let coloring = GradientColors::new(256, 256);
        assert_eq!(coloring.color_for_pixel(0, 0), Vector3::new(0.0, 0.0, 0.0));
        assert_eq!(coloring.color_for_pixel(255, 0), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(coloring.color_for_pixel(0, 255), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(
            coloring.color_for_pixel(255, 255),
            Vector3::new(1.0, 1.0, 0.0)
        );
    }

    #[test]
    fn red_grows_along_a_row() {
        let coloring = GradientColors::new(256, 256);
        for x in 1..256u16 {
            let prev = coloring.color_for_pixel(x - 1, 17);
            let cur = coloring.color_for_pixel(x, 17);
            assert!(cur[0] > prev[0]);
            assert_eq!(cur[1], prev[1]);
        }
    }
}
