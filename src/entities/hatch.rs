//! Hatch pattern definitions

use crate::types::Vector2;

/// One line family of a hatch pattern
#[derive(Debug, Clone, PartialEq)]
pub struct HatchPatternLine {
    /// Pattern line angle in degrees
    pub angle: f64,
    /// Pattern line base point
    pub base_point: Vector2,
    /// Offset between successive lines, in drawing coordinates
    pub offset: Vector2,
    /// Dash lengths (positive = dash, negative = space)
    pub dash_lengths: Vec<f64>,
}

impl HatchPatternLine {
    /// Offset expressed in the line's own frame: `x` is the shift along the
    /// line, `y` the distance between lines.
    pub fn shift_and_offset(&self) -> Vector2 {
        self.offset.to_local_frame(self.angle.to_radians())
    }

    /// Format as a `.pat` line:
    /// `angle, base x, base y, shift, offset[, dash...]`
    pub fn to_pat_line(&self, precision: usize) -> String {
        let local = self.shift_and_offset();
        let mut fields = vec![
            format_fixed(self.angle, precision),
            format_fixed(self.base_point.x, precision),
            format_fixed(self.base_point.y, precision),
            format_fixed(local.x, precision),
            format_fixed(local.y, precision),
        ];
        fields.extend(self.dash_lengths.iter().map(|d| format_fixed(*d, precision)));
        fields.join(", ")
    }
}

/// Hatch pattern
#[derive(Debug, Clone, PartialEq)]
pub struct HatchPattern {
    /// Pattern name
    pub name: String,
    /// Pattern description
    pub description: String,
    /// Pattern lines
    pub lines: Vec<HatchPatternLine>,
}

impl HatchPattern {
    /// Create a new pattern
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            lines: Vec::new(),
        }
    }

    /// Add a pattern line
    pub fn add_line(&mut self, line: HatchPatternLine) {
        self.lines.push(line);
    }

    /// `*name, description`
    pub fn header_line(&self) -> String {
        format!("*{}, {}", self.name, self.description)
    }

    /// The pattern in `.pat` form, header first
    pub fn to_pat_lines(&self, precision: usize) -> Vec<String> {
        std::iter::once(self.header_line())
            .chain(self.lines.iter().map(|l| l.to_pat_line(precision)))
            .collect()
    }
}

/// Fixed-point decimal with `.` as separator. Ties round away from zero,
/// and a value that rounds to zero never carries a minus sign.
pub fn format_fixed(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", precision, value);
    }

    // Shortest round-trip digits, so 0.0625 is rounded as written
    let text = value.abs().to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    digits.extend(frac_part.bytes().take(precision));
    digits.resize(int_part.len() + precision, b'0');
    if frac_part.as_bytes().get(precision).is_some_and(|&d| d >= b'5') {
        round_up(&mut digits);
    }

    let split = digits.len() - precision;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 && digits.iter().any(|&d| d != b'0') {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| d as char));
    if precision > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| d as char));
    }
    out
}

/// Add one unit in the last place of a decimal digit string
fn round_up(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(angle: f64, offset: Vector2, dashes: &[f64]) -> HatchPatternLine {
        HatchPatternLine {
            angle,
            base_point: Vector2::ZERO,
            offset,
            dash_lengths: dashes.to_vec(),
        }
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1.0, 3), "1.000");
        assert_eq!(format_fixed(-2.5, 3), "-2.500");
        assert_eq!(format_fixed(0.12345, 2), "0.12");
        assert_eq!(format_fixed(-0.0, 3), "0.000");
        assert_eq!(format_fixed(-0.0004, 3), "0.000");
        assert_eq!(format_fixed(1.2246e-16, 3), "0.000");
    }

    #[test]
    fn test_format_fixed_ties_away_from_zero() {
        assert_eq!(format_fixed(0.0625, 3), "0.063");
        assert_eq!(format_fixed(-0.0625, 3), "-0.063");
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(1.0005, 3), "1.001");
        assert_eq!(format_fixed(2.5, 0), "3");
        assert_eq!(format_fixed(-0.0005, 3), "-0.001");
    }

    #[test]
    fn test_format_fixed_carry() {
        assert_eq!(format_fixed(9.9996, 3), "10.000");
        assert_eq!(format_fixed(-0.9995, 3), "-1.000");
        assert_eq!(format_fixed(99.5, 0), "100");
        assert_eq!(format_fixed(0.0004999, 3), "0.000");
    }

    #[test]
    fn test_shift_and_offset_unrotated() {
        let l = line(0.0, Vector2::new(0.5, 2.0), &[]);
        assert_eq!(l.shift_and_offset(), Vector2::new(0.5, 2.0));
    }

    #[test]
    fn test_shift_and_offset_at_90_degrees() {
        let l = line(90.0, Vector2::new(0.0, 2.0), &[1.0]);
        let local = l.shift_and_offset();
        assert!((local.x - 2.0).abs() < 1e-12);
        assert!(local.y.abs() < 1e-12);
        assert_eq!(l.to_pat_line(3), "90.000, 0.000, 0.000, 2.000, 0.000, 1.000");
    }

    #[test]
    fn test_shift_and_offset_at_45_degrees() {
        let l = line(45.0, Vector2::new(0.0, 1.0), &[0.25, -0.125]);
        assert_eq!(l.to_pat_line(3), "45.000, 0.000, 0.000, 0.707, 0.707, 0.250, -0.125");
    }

    #[test]
    fn test_to_pat_lines() {
        let mut pattern = HatchPattern::new("FOO");
        pattern.description = "description placeholder".to_string();
        pattern.add_line(line(0.0, Vector2::new(0.0, 1.0), &[]));
        assert_eq!(
            pattern.to_pat_lines(3),
            vec!["*FOO, description placeholder", "0.000, 0.000, 0.000, 0.000, 1.000"]
        );
    }
}
