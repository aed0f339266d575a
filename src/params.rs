pub const IMAGE_WIDTH: u16 = 256;
pub const IMAGE_HEIGHT: u16 = 256;

#[derive(Debug, Clone, Copy)]
pub struct Params {
    pub width: u16,
    pub height: u16,
}

impl Default for Params {
    fn default() -> Params {
        Params {
            width: IMAGE_WIDTH,
            height: IMAGE_HEIGHT,
        }
    }
}
