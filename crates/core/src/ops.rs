//! Vector arithmetic primitives over [`Vec3`].
//!
//! Every function is pure and allocation-free. Operands are taken by value,
//! so writing a result back over one of its inputs (`*v = add(*v, w)`) is
//! always safe: the whole result exists before anything is stored.
//!
//! # Degenerate inputs
//! [`angle`], [`angle_quick`] and [`normalize`] need a non-zero operand
//! length. Below [`EPSILON`] they emit a `tracing` warning and return a
//! [`Checked`] carrying a fixed sentinel and the [`DomainError`]:
//!
//! | Operation     | Sentinel      |
//! |---------------|---------------|
//! | `angle`       | `0.0`         |
//! | `angle_quick` | `1.0`         |
//! | `normalize`   | `Vec3::ZERO`  |

use tracing::warn;

use crate::core_types::{Checked, DomainError, Operation, Vec3};

/// Length below which a vector is treated as zero for angle and normalization.
pub const EPSILON: f32 = 1e-6;

/// Comparison tolerance for checking results against expected values.
///
/// Deliberately looser than [`EPSILON`]: it absorbs accumulated `f32`
/// rounding in test oracles rather than detecting degenerate input.
pub const DEFAULT_TOLERANCE: f32 = 1e-5;

/// Vector pointing from point `a` to point `b` (`b - a`).
#[inline]
pub fn from_points(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(b.x - a.x, b.y - a.y, b.z - a.z)
}

#[inline]
pub fn add(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}

/// `a - b`
#[inline]
pub fn subtract(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

#[inline]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

/// Right-handed cross product `a × b`.
///
/// Parallel operands (including a zero operand) give the zero vector up to
/// rounding; compare against zero with a tolerance.
#[inline]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Scale `v` by `s` in place.
#[inline]
pub fn scale(v: &mut Vec3, s: f32) {
    v.x *= s;
    v.y *= s;
    v.z *= s;
}

/// Euclidean length.
#[inline]
pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `a`, or the zero vector if `a` is degenerate.
pub fn normalize(a: Vec3) -> Checked<Vec3> {
    let len = length(a);
    if len < EPSILON {
        return reject(Vec3::ZERO, Operation::Normalize);
    }

    let inv_len = 1.0 / len;
    Checked::ok(Vec3::new(a.x * inv_len, a.y * inv_len, a.z * inv_len))
}

/// Angle between `a` and `b` in radians, in `[0, π]`.
pub fn angle(a: Vec3, b: Vec3) -> Checked<f32> {
    match cosine(a, b) {
        Some(cos_angle) => Checked::ok(cos_angle.acos()),
        None => reject(0.0, Operation::Angle),
    }
}

/// Cosine of the angle between `a` and `b`, in `[-1, 1]`.
///
/// Skips the `acos` of [`angle`]. Larger values mean smaller angles, so it
/// can stand in for [`angle`] when only the ordering matters.
pub fn angle_quick(a: Vec3, b: Vec3) -> Checked<f32> {
    match cosine(a, b) {
        Some(cos_angle) => Checked::ok(cos_angle),
        // cos(0)
        None => reject(1.0, Operation::AngleQuick),
    }
}

/// Reflect `v` about the plane with normal `n`: `v - 2(v·n)n`.
///
/// `n` must already be unit length; it is not normalized here.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    let d = 2.0 * dot(v, n);
    Vec3::new(v.x - d * n.x, v.y - d * n.y, v.z - d * n.z)
}

/// True when every component pair is identical or differs by at most `tolerance`.
///
/// Identical components are accepted before the difference is taken, so
/// matching infinities compare equal.
pub fn equals(a: Vec3, b: Vec3, tolerance: f32) -> bool {
    a.to_array()
        .into_iter()
        .zip(b.to_array())
        .all(|(x, y)| x == y || (x - y).abs() <= tolerance)
}

/// Clamped cosine of the angle between `a` and `b`, or `None` if either is degenerate.
#[inline]
fn cosine(a: Vec3, b: Vec3) -> Option<f32> {
    let len_a = length(a);
    let len_b = length(b);
    if len_a < EPSILON || len_b < EPSILON {
        return None;
    }

    // Rounding can push |cos| slightly past 1, where acos is NaN
    Some((dot(a, b) / (len_a * len_b)).clamp(-1.0, 1.0))
}

#[cold]
fn reject<T: Copy>(sentinel: T, operation: Operation) -> Checked<T> {
    let error = DomainError::ZeroLengthVector { operation };
    warn!(operation = %operation, "{error}");
    Checked::degenerate(sentinel, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
    use std::io;
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Run `f` under a WARN-level fmt subscriber and return everything it logged.
    fn captured_warnings(f: impl FnOnce()) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = CaptureWriter(Arc::clone(&buffer));
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn has_field(log: &str, field: &str) -> bool {
        log.split_whitespace().any(|token| token == field)
    }

    #[test]
    fn test_from_points() {
        let v = from_points(Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 6.0, 8.0));
        assert_eq!(v, Vec3::new(3.0, 4.0, 5.0));

        let same = Vec3::new(5.0, 5.0, 5.0);
        assert_eq!(from_points(same, same), Vec3::ZERO);
    }

    #[test]
    fn test_add_subtract_in_place() {
        let mut a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        a = add(a, b);
        assert_eq!(a, Vec3::new(5.0, 7.0, 9.0));
        a = subtract(a, b);
        assert_eq!(a, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(subtract(a, a), Vec3::ZERO);
    }

    #[test]
    fn test_cross_basis() {
        assert_eq!(cross(Vec3::X, Vec3::Y), Vec3::Z);
        assert_eq!(cross(Vec3::Y, Vec3::X), -Vec3::Z);
        assert_eq!(cross(Vec3::Z, Vec3::X), Vec3::Y);
    }

    #[test]
    fn test_cross_overwriting_operand() {
        let mut a = Vec3::X;
        a = cross(a, Vec3::Y);
        assert_eq!(a, Vec3::Z);
    }

    #[test]
    fn test_scale() {
        let mut v = Vec3::new(2.0, 4.0, 6.0);
        scale(&mut v, 0.5);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        scale(&mut v, -1.0);
        assert_eq!(v, Vec3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_length_and_normalize() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert_relative_eq!(length(v), 5.0);

        let unit = normalize(v);
        assert!(!unit.is_degenerate());
        assert_abs_diff_eq!(unit.value(), Vec3::new(0.6, 0.8, 0.0));
    }

    #[test]
    fn test_normalize_zero_reports_error() {
        let checked = normalize(Vec3::ZERO);
        assert_eq!(checked.value(), Vec3::ZERO);
        assert_eq!(
            checked.error(),
            Some(DomainError::ZeroLengthVector {
                operation: Operation::Normalize
            })
        );
    }

    #[test]
    fn test_normalize_sub_epsilon_is_degenerate() {
        let checked = normalize(Vec3::new(5e-7, 0.0, 0.0));
        assert!(checked.is_degenerate());
        assert_eq!(checked.value(), Vec3::ZERO);
    }

    #[test]
    fn test_angle_cardinal() {
        assert_abs_diff_eq!(angle(Vec3::X, Vec3::Y).value(), FRAC_PI_2, epsilon = 1e-5);
        assert_abs_diff_eq!(angle(Vec3::X, -Vec3::X).value(), PI, epsilon = 1e-5);
        assert_abs_diff_eq!(
            angle(Vec3::X, Vec3::new(1.0, 1.0, 0.0)).value(),
            FRAC_PI_4,
            epsilon = 1e-5
        );
        assert_eq!(angle(Vec3::X, Vec3::new(2.0, 0.0, 0.0)).value(), 0.0);
    }

    #[test]
    fn test_angle_clamps_rounding() {
        // Nearly parallel but not exactly a multiple: |cos| may round past 1
        let a = Vec3::new(0.1, 0.2, 0.3);
        let b = Vec3::new(0.3, 0.6, 0.9);
        let checked = angle(a, b);
        assert!(!checked.value().is_nan());
        assert_abs_diff_eq!(checked.value(), 0.0, epsilon = 1e-3);
        assert!((-1.0..=1.0).contains(&angle_quick(a, -b).value()));
    }

    #[test]
    fn test_angle_degenerate_sentinels() {
        let angle_result = angle(Vec3::ZERO, Vec3::X);
        assert_eq!(angle_result.value(), 0.0);
        assert_eq!(
            angle_result.error().map(|e| e.operation()),
            Some(Operation::Angle)
        );

        let quick = angle_quick(Vec3::X, Vec3::ZERO);
        assert_eq!(quick.value(), 1.0);
        assert_eq!(
            quick.error().map(|e| e.operation()),
            Some(Operation::AngleQuick)
        );
    }

    #[test]
    fn test_angle_quick_sixty_degrees() {
        let b = Vec3::new(0.5, 0.866_025, 0.0);
        assert_abs_diff_eq!(angle_quick(Vec3::X, b).value(), 0.5, epsilon = 1e-5);
    }

    #[test]
    fn test_reflect() {
        let n = Vec3::X;
        assert_eq!(reflect(Vec3::new(1.0, 1.0, 0.0), n), Vec3::new(-1.0, 1.0, 0.0));
        assert_eq!(reflect(Vec3::Y, n), Vec3::Y);
        assert_eq!(reflect(Vec3::X, n), -Vec3::X);
    }

    #[test]
    fn test_reflect_does_not_normalize() {
        // Non-unit normal: result is scaled accordingly, not corrected
        let r = reflect(Vec3::X, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(r, Vec3::new(-7.0, 0.0, 0.0));
    }

    #[test]
    fn test_equals() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        assert!(equals(a, a, 0.0));
        assert!(equals(a, Vec3::new(1.000_000_5, 2.0, 3.0), DEFAULT_TOLERANCE));
        assert!(!equals(a, Vec3::new(1.1, 2.0, 3.0), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_equals_signed_zero_and_infinity() {
        assert!(equals(Vec3::new(0.0, 0.0, 0.0), Vec3::new(-0.0, 0.0, -0.0), 0.0));
        let inf = Vec3::new(f32::INFINITY, 1.0, f32::NEG_INFINITY);
        assert!(equals(inf, inf, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_degenerate_operations_log_warning() {
        let log = captured_warnings(|| {
            let _ = normalize(Vec3::ZERO);
        });
        assert!(log.contains("WARN"), "no warning logged: {log:?}");
        assert!(has_field(&log, "operation=normalize"), "{log:?}");
        assert!(log.contains("normalize: cannot normalize zero length vector"));

        let log = captured_warnings(|| {
            let _ = angle(Vec3::ZERO, Vec3::X);
        });
        assert!(log.contains("WARN"), "no warning logged: {log:?}");
        assert!(has_field(&log, "operation=angle"), "{log:?}");
        assert!(!has_field(&log, "operation=angle_quick"));

        let log = captured_warnings(|| {
            let _ = angle_quick(Vec3::X, Vec3::ZERO);
        });
        assert!(log.contains("WARN"), "no warning logged: {log:?}");
        assert!(has_field(&log, "operation=angle_quick"), "{log:?}");
        assert!(log.contains("angle_quick: cannot compute angle with zero length vector"));
    }

    #[test]
    fn test_well_defined_operations_stay_quiet() {
        let log = captured_warnings(|| {
            let _ = normalize(Vec3::new(3.0, 4.0, 0.0));
            let _ = angle(Vec3::X, Vec3::Y);
            let _ = angle_quick(Vec3::X, Vec3::Y);
        });
        assert!(log.is_empty(), "unexpected output: {log:?}");
    }
}
