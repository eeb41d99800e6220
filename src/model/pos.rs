use std::{fmt, ops};

/// Simple (x, y) coordinate / vector
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    /// Position on the x-axis.
    pub x: f32,
    /// Position on the y-axis.
    pub y: f32,
}

impl Pos {
    /// Create a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return the position's length squared.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Return the position's length.
    pub fn length(self) -> f32 {
        f64::from(self.x * self.x + self.y * self.y).sqrt() as f32
    }

    /// Return the dot product.
    pub fn dot(self, other: Self) -> f32 {
        (self.x * other.x) + (self.y * other.y)
    }

    /// Return the distance to another position.
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }
}

impl ops::Add<Pos> for Pos {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl ops::Sub<Pos> for Pos {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl ops::Mul<f32> for Pos {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pythagorean_length() {
        let pos = Pos::new(3.0, 4.0);

        assert!((pos.length() - 5.0).abs() < f32::EPSILON);
        assert!((pos.length_squared() - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Pos::new(10.0, 20.0);
        let b = Pos::new(-5.0, 7.5);

        assert!((a.distance(b) - b.distance(a)).abs() < f32::EPSILON);
    }
}
