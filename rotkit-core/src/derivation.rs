/// Human-readable record of how an extractor arrived at its angles
use std::fmt;

/// One line of a derivation.
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    /// `label = formula = substituted = value`
    Step {
        label: &'static str,
        formula: &'static str,
        /// The formula with the matrix entries replaced by their values
        substituted: String,
        value: f64,
        degrees: bool,
    },
    /// Free text, used to flag the degenerate branch
    Note(&'static str),
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Step {
                label,
                formula,
                substituted,
                value,
                degrees,
            } => {
                write!(f, "{label} = {formula}")?;
                if !substituted.is_empty() {
                    write!(f, " = {substituted}")?;
                }
                write!(f, " = {value:.4}")?;
                if *degrees {
                    write!(f, "°")?;
                }
                Ok(())
            }
            Line::Note(text) => f.write_str(text),
        }
    }
}

/// Ordered derivation trace
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Derivation {
    lines: Vec<Line>,
}

impl Derivation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an angle (given in radians, shown in degrees) and return it in degrees
    pub(crate) fn angle(
        &mut self,
        label: &'static str,
        formula: &'static str,
        substituted: String,
        radians: f64,
    ) -> f64 {
        let degrees = radians.to_degrees();
        self.push(Line::Step {
            label,
            formula,
            substituted,
            value: degrees,
            degrees: true,
        });
        degrees
    }

    /// Record a dimensionless value
    pub(crate) fn value(
        &mut self,
        label: &'static str,
        formula: &'static str,
        substituted: String,
        value: f64,
    ) -> f64 {
        self.push(Line::Step {
            label,
            formula,
            substituted,
            value,
            degrees: false,
        });
        value
    }

    pub(crate) fn note(&mut self, text: &'static str) {
        self.push(Line::Note(text));
    }

    fn push(&mut self, line: Line) {
        log::trace!("{line}");
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_shows_substituted_values() {
        let mut derivation = Derivation::new();
        let degrees = derivation.angle(
            "beta",
            "acos(r33)",
            format!("acos({:.4})", 0.5),
            std::f64::consts::FRAC_PI_3,
        );
        assert!((degrees - 60.0).abs() < 1e-12);
        assert_eq!(
            derivation.lines()[0].to_string(),
            "beta = acos(r33) = acos(0.5000) = 60.0000°"
        );
    }

    #[test]
    fn test_display_one_line_per_entry() {
        let mut derivation = Derivation::new();
        derivation.note("sin(beta) ≈ 0, singular case");
        derivation.value("kx", "1", String::new(), 1.0);

        assert_eq!(derivation.len(), 2);
        assert_eq!(
            derivation.to_string(),
            "sin(beta) ≈ 0, singular case\nkx = 1 = 1.0000\n"
        );
    }
}
