use std::ffi::c_int;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A point on the integer plane, layout-compatible with the wrapped C++
/// class: two `c_int` fields, x first.
///
/// The layout is frozen. The size constants generated for the C side are
/// only correct as long as this struct stays two plain ints.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QPoint {
    xp: c_int,
    yp: c_int,
}

impl QPoint {
    pub const fn new(x: c_int, y: c_int) -> Self {
        Self { xp: x, yp: y }
    }

    pub const fn x(&self) -> c_int {
        self.xp
    }

    pub const fn y(&self) -> c_int {
        self.yp
    }

    pub fn set_x(&mut self, x: c_int) {
        self.xp = x;
    }

    pub fn set_y(&mut self, y: c_int) {
        self.yp = y;
    }

    /// True for the origin, which is what default construction yields.
    pub const fn is_null(&self) -> bool {
        self.xp == 0 && self.yp == 0
    }

    /// Taxicab distance from the origin.
    pub const fn manhattan_length(&self) -> c_int {
        self.xp.abs() + self.yp.abs()
    }

    /// The point mirrored over the diagonal, x and y swapped.
    pub const fn transposed(&self) -> Self {
        Self {
            xp: self.yp,
            yp: self.xp,
        }
    }
}

impl Add for QPoint {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.xp + rhs.xp, self.yp + rhs.yp)
    }
}

impl AddAssign for QPoint {
    fn add_assign(&mut self, rhs: Self) {
        self.xp += rhs.xp;
        self.yp += rhs.yp;
    }
}

impl Sub for QPoint {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.xp - rhs.xp, self.yp - rhs.yp)
    }
}

impl SubAssign for QPoint {
    fn sub_assign(&mut self, rhs: Self) {
        self.xp -= rhs.xp;
        self.yp -= rhs.yp;
    }
}

impl Neg for QPoint {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.xp, -self.yp)
    }
}
