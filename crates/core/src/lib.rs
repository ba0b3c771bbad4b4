//! Core constants, unit prefixes, and elementary math shared across the desk calculator workspace.

pub mod constants;
pub mod stats;

/// SI prefix conversions.
pub mod si {
    use std::fmt;
    use std::str::FromStr;

    use thiserror::Error;

    /// Multiply `x` by `10^y`.
    #[inline]
    pub fn exp10(x: f64, y: i32) -> f64 {
        x * 10f64.powi(y)
    }

    /// Decimal prefixes (plus the angstrom, which behaves like one for lengths).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Prefix {
        Yotta,
        Zetta,
        Exa,
        Peta,
        Tera,
        Giga,
        Mega,
        Kilo,
        Centi,
        Milli,
        Micro,
        Nano,
        Angstrom,
        Pico,
        Femto,
        Atto,
        Zepto,
        Yocto,
    }

    impl Prefix {
        pub const ALL: [Prefix; 18] = [
            Prefix::Yotta,
            Prefix::Zetta,
            Prefix::Exa,
            Prefix::Peta,
            Prefix::Tera,
            Prefix::Giga,
            Prefix::Mega,
            Prefix::Kilo,
            Prefix::Centi,
            Prefix::Milli,
            Prefix::Micro,
            Prefix::Nano,
            Prefix::Angstrom,
            Prefix::Pico,
            Prefix::Femto,
            Prefix::Atto,
            Prefix::Zepto,
            Prefix::Yocto,
        ];

        /// Power of ten one prefixed unit represents in base units.
        pub fn exponent(self) -> i32 {
            match self {
                Prefix::Yotta => 24,
                Prefix::Zetta => 21,
                Prefix::Exa => 18,
                Prefix::Peta => 15,
                Prefix::Tera => 12,
                Prefix::Giga => 9,
                Prefix::Mega => 6,
                Prefix::Kilo => 3,
                Prefix::Centi => -2,
                Prefix::Milli => -3,
                Prefix::Micro => -6,
                Prefix::Nano => -9,
                Prefix::Angstrom => -10,
                Prefix::Pico => -12,
                Prefix::Femto => -15,
                Prefix::Atto => -18,
                Prefix::Zepto => -21,
                Prefix::Yocto => -24,
            }
        }

        pub fn symbol(self) -> &'static str {
            match self {
                Prefix::Yotta => "Y",
                Prefix::Zetta => "Z",
                Prefix::Exa => "E",
                Prefix::Peta => "P",
                Prefix::Tera => "T",
                Prefix::Giga => "G",
                Prefix::Mega => "M",
                Prefix::Kilo => "k",
                Prefix::Centi => "c",
                Prefix::Milli => "m",
                Prefix::Micro => "µ",
                Prefix::Nano => "n",
                Prefix::Angstrom => "Å",
                Prefix::Pico => "p",
                Prefix::Femto => "f",
                Prefix::Atto => "a",
                Prefix::Zepto => "z",
                Prefix::Yocto => "y",
            }
        }

        pub fn name(self) -> &'static str {
            match self {
                Prefix::Yotta => "yotta",
                Prefix::Zetta => "zetta",
                Prefix::Exa => "exa",
                Prefix::Peta => "peta",
                Prefix::Tera => "tera",
                Prefix::Giga => "giga",
                Prefix::Mega => "mega",
                Prefix::Kilo => "kilo",
                Prefix::Centi => "centi",
                Prefix::Milli => "milli",
                Prefix::Micro => "micro",
                Prefix::Nano => "nano",
                Prefix::Angstrom => "angstrom",
                Prefix::Pico => "pico",
                Prefix::Femto => "femto",
                Prefix::Atto => "atto",
                Prefix::Zepto => "zepto",
                Prefix::Yocto => "yocto",
            }
        }
    }

    impl fmt::Display for Prefix {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.name())
        }
    }

    #[derive(Debug, Error, PartialEq, Eq)]
    #[error("unknown SI prefix `{0}`")]
    pub struct UnknownPrefix(pub String);

    impl FromStr for Prefix {
        type Err = UnknownPrefix;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            let lower = s.trim().to_ascii_lowercase();
            Prefix::ALL
                .into_iter()
                .find(|p| p.name() == lower)
                .ok_or_else(|| UnknownPrefix(s.to_string()))
        }
    }

    /// Express a base-unit value in prefixed units (1 m -> 0.001 km).
    #[inline]
    pub fn to_prefix(x: f64, prefix: Prefix) -> f64 {
        exp10(x, -prefix.exponent())
    }

    /// Express a prefixed value in base units (1 km -> 1000 m).
    #[inline]
    pub fn from_prefix(x: f64, prefix: Prefix) -> f64 {
        exp10(x, prefix.exponent())
    }
}

/// Trigonometry with angles in degrees.
pub mod trig {
    /// Sine of an angle in degrees.
    #[inline]
    pub fn sind(x: f64) -> f64 {
        x.to_radians().sin()
    }

    /// Cosine of an angle in degrees.
    #[inline]
    pub fn cosd(x: f64) -> f64 {
        x.to_radians().cos()
    }

    /// Tangent of an angle in degrees.
    #[inline]
    pub fn tand(x: f64) -> f64 {
        x.to_radians().tan()
    }

    /// Arcsine, in degrees.
    #[inline]
    pub fn asind(x: f64) -> f64 {
        x.asin().to_degrees()
    }

    /// Arccosine, in degrees.
    #[inline]
    pub fn acosd(x: f64) -> f64 {
        x.acos().to_degrees()
    }

    /// Arctangent, in degrees.
    #[inline]
    pub fn atand(x: f64) -> f64 {
        x.atan().to_degrees()
    }

    /// Hyperbolic sine with the argument in degrees.
    #[inline]
    pub fn sinhd(x: f64) -> f64 {
        x.to_radians().sinh()
    }

    /// Hyperbolic cosine with the argument in degrees.
    #[inline]
    pub fn coshd(x: f64) -> f64 {
        x.to_radians().cosh()
    }

    /// Hyperbolic tangent with the argument in degrees.
    #[inline]
    pub fn tanhd(x: f64) -> f64 {
        x.to_radians().tanh()
    }

    /// Inverse hyperbolic sine, in degrees.
    #[inline]
    pub fn asinhd(x: f64) -> f64 {
        x.asinh().to_degrees()
    }

    /// Inverse hyperbolic cosine, in degrees.
    #[inline]
    pub fn acoshd(x: f64) -> f64 {
        x.acosh().to_degrees()
    }

    /// Inverse hyperbolic tangent, in degrees.
    #[inline]
    pub fn atanhd(x: f64) -> f64 {
        x.atanh().to_degrees()
    }
}

/// Plane geometry and small algebra helpers.
pub mod geometry {
    /// Discriminant of `ax² + bx + c`.
    #[inline]
    pub fn quad_det(a: f64, b: f64, c: f64) -> f64 {
        b * b - 4.0 * a * c
    }

    /// Real roots of `ax² + bx + c = 0`, larger-numerator root first.
    ///
    /// Returns `None` for a negative discriminant or a degenerate (`a == 0`) equation.
    pub fn quad(a: f64, b: f64, c: f64) -> Option<(f64, f64)> {
        let det = quad_det(a, b, c);
        if a == 0.0 || det < 0.0 {
            return None;
        }
        let root = det.sqrt();
        Some(((-b + root) / (2.0 * a), (-b - root) / (2.0 * a)))
    }

    #[inline]
    pub fn mid(a: f64, b: f64) -> f64 {
        (a + b) / 2.0
    }

    /// Midpoint of two points in the plane.
    #[inline]
    pub fn mid2(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
        (mid(x1, x2), mid(y1, y2))
    }

    /// Signed distance from `a` to `b`.
    #[inline]
    pub fn dist(a: f64, b: f64) -> f64 {
        b - a
    }

    /// Euclidean distance between two points in the plane.
    #[inline]
    pub fn dist2(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
        dist(x1, x2).hypot(dist(y1, y2))
    }

    /// Linear interpolation of `y` at `xn` between `(x1, y1)` and `(x2, y2)`.
    #[inline]
    pub fn lint(x1: f64, xn: f64, x2: f64, y1: f64, y2: f64) -> f64 {
        (y2 - y1) / (x2 - x1) * (xn - x1) + y1
    }

    /// Remaining leg of a right triangle given hypotenuse `c` and leg `a`.
    pub fn pythleg(c: f64, a: f64) -> Option<f64> {
        let square = c * c - a * a;
        (square >= 0.0).then(|| square.sqrt())
    }
}

/// Minimal vector helpers over `[f64; 3]`.
pub mod vector {
    /// Alias for a 3D vector.
    pub type Vector3 = [f64; 3];

    /// Pad or truncate an n-dimensional slice to three components.
    pub fn to_3d(v: &[f64]) -> Vector3 {
        let mut out = [0.0; 3];
        for (dst, src) in out.iter_mut().zip(v) {
            *dst = *src;
        }
        out
    }

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        dot(v, v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Cross product `a × b`.
    #[inline]
    pub fn cross(a: &Vector3, b: &Vector3) -> Vector3 {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        add(a, &neg(b))
    }

    #[inline]
    pub fn neg(v: &Vector3) -> Vector3 {
        [-v[0], -v[1], -v[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Projection of `a` onto `b`; `None` when `b` is the zero vector.
    pub fn proj(a: &Vector3, b: &Vector3) -> Option<Vector3> {
        let bb = dot(b, b);
        (bb != 0.0).then(|| scale(b, dot(a, b) / bb))
    }

    /// Unit vector in the direction of `v`; `None` for the zero vector.
    pub fn unit(v: &Vector3) -> Option<Vector3> {
        let len = norm(v);
        (len != 0.0).then(|| scale(v, 1.0 / len))
    }

    /// Angle between two vectors in radians.
    pub fn angle(a: &Vector3, b: &Vector3) -> Option<f64> {
        let denom = norm(a) * norm(b);
        if denom == 0.0 {
            return None;
        }
        // rounding can push the cosine a hair outside [-1, 1]
        Some((dot(a, b) / denom).clamp(-1.0, 1.0).acos())
    }

    /// Angle between two vectors in degrees.
    pub fn angle_deg(a: &Vector3, b: &Vector3) -> Option<f64> {
        angle(a, b).map(f64::to_degrees)
    }
}
