/// A pixel coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Axis-aligned rectangle described by its four corners
///
/// Always built from an origin and a size, so opposite edges share their
/// coordinates and the shape is never rotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
}

impl Rectangle {
    pub fn from_origin(position: Point, size: Size) -> Self {
        let right = position.x.saturating_add_unsigned(size.width);
        let bottom = position.y.saturating_add_unsigned(size.height);

        Self {
            top_left: position,
            top_right: Point::new(right, position.y),
            bottom_left: Point::new(position.x, bottom),
            bottom_right: Point::new(right, bottom),
        }
    }

    pub fn left(&self) -> i32 {
        self.top_left.x
    }

    pub fn right(&self) -> i32 {
        self.top_right.x
    }

    pub fn top(&self) -> i32 {
        self.top_left.y
    }

    pub fn bottom(&self) -> i32 {
        self.bottom_left.y
    }

    pub fn size(&self) -> Size {
        Size::new(
            self.right().abs_diff(self.left()),
            self.bottom().abs_diff(self.top()),
        )
    }
}

/// Containment test with the rectangle grown outward by `tolerance` pixels
/// on every side. Edges and corners count as inside.
pub fn is_point_in_rectangle(point: Point, rect: &Rectangle, tolerance: u32) -> bool {
    // i64 so expanding near i32::MIN/MAX cannot wrap
    let tol = i64::from(tolerance);
    let (px, py) = (i64::from(point.x), i64::from(point.y));

    let left = i64::from(rect.left()) - tol;
    let right = i64::from(rect.right()) + tol;
    let top = i64::from(rect.top()) - tol;
    let bottom = i64::from(rect.bottom()) + tol;

    (left..=right).contains(&px) && (top..=bottom).contains(&py)
}
