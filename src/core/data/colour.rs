#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour { r: 0, g: 0, b: 0 };

    #[must_use]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
