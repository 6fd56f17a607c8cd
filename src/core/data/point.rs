/// A pixel coordinate, origin at the top-left of the image.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
