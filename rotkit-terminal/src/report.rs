/// Plain-text report writer with optional terminal colors
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix3, Matrix4, Point3};
use rotkit_core::{Derivation, Line};
use std::io::{self, Write};

/// Values this close to zero are printed as 0 so rounding noise does not show up as `-0.0000`
const DISPLAY_ZERO: f64 = 5e-5;

/// Writes matrices, angles, points and derivations to any `Write` sink
pub struct Report<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> Report<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::Yellow, text)?;
        writeln!(self.out)
    }

    pub fn text(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// An expected failure, e.g. an undefined rotation axis
    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.colored(Color::Red, text)?;
        writeln!(self.out)
    }

    pub fn matrix3(&mut self, label: &str, m: &Matrix3<f64>) -> io::Result<()> {
        writeln!(self.out, "{label} =")?;
        for row in m.row_iter() {
            self.row(row.iter().copied())?;
        }
        Ok(())
    }

    pub fn matrix4(&mut self, label: &str, m: &Matrix4<f64>) -> io::Result<()> {
        writeln!(self.out, "{label} =")?;
        for row in m.row_iter() {
            self.row(row.iter().copied())?;
        }
        Ok(())
    }

    pub fn angles(&mut self, names: [&str; 3], degrees: [f64; 3]) -> io::Result<()> {
        let parts: Vec<String> = names
            .iter()
            .zip(degrees)
            .map(|(name, value)| format!("{name} = {:.4}°", tidy(value)))
            .collect();
        writeln!(self.out, "{}", parts.join(", "))
    }

    pub fn point(&mut self, label: &str, p: &Point3<f64>) -> io::Result<()> {
        writeln!(
            self.out,
            "{label} = [{:.4}, {:.4}, {:.4}]",
            tidy(p.x),
            tidy(p.y),
            tidy(p.z)
        )
    }

    pub fn derivation(&mut self, derivation: &Derivation) -> io::Result<()> {
        for line in derivation.lines() {
            match line {
                Line::Step { .. } => writeln!(self.out, "  {line}")?,
                Line::Note(_) => {
                    write!(self.out, "  ")?;
                    self.colored(Color::DarkYellow, &line.to_string())?;
                    writeln!(self.out)?;
                }
            }
        }
        Ok(())
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn row(&mut self, values: impl Iterator<Item = f64>) -> io::Result<()> {
        write!(self.out, "  [")?;
        for value in values {
            write!(self.out, " {:>9.4}", tidy(value))?;
        }
        writeln!(self.out, " ]")
    }

    fn colored(&mut self, color: Color, text: &str) -> io::Result<()> {
        if self.color {
            self.out.queue(SetForegroundColor(color))?;
        }
        write!(self.out, "{text}")?;
        if self.color {
            self.out.queue(ResetColor)?;
        }
        Ok(())
    }
}

fn tidy(value: f64) -> f64 {
    if value.abs() < DISPLAY_ZERO {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Report<Vec<u8>>) -> io::Result<()>) -> String {
        let mut report = Report::new(Vec::new(), false);
        f(&mut report).unwrap();
        String::from_utf8(report.into_inner()).unwrap()
    }

    #[test]
    fn test_matrix_rows() {
        let text = render(|r| r.matrix3("R", &Matrix3::identity()));
        assert_eq!(
            text,
            "R =\n  [    1.0000    0.0000    0.0000 ]\n  [    0.0000    1.0000    0.0000 ]\n  [    0.0000    0.0000    1.0000 ]\n"
        );
    }

    #[test]
    fn test_rounding_noise_is_hidden() {
        let text = render(|r| r.point("p", &Point3::new(-6.1e-17, 1.0, -2.5)));
        assert_eq!(text, "p = [0.0000, 1.0000, -2.5000]\n");
    }

    #[test]
    fn test_angles_line() {
        let text = render(|r| r.angles(["gamma", "beta", "alpha"], [60.0, 0.0, -0.0]));
        assert_eq!(text, "gamma = 60.0000°, beta = 0.0000°, alpha = 0.0000°\n");
    }

    #[test]
    fn test_plain_output_has_no_escape_codes() {
        let text = render(|r| r.heading("ZYX"));
        assert_eq!(text, "ZYX\n");
    }

    #[test]
    fn test_colored_output_wraps_text() {
        let mut report = Report::new(Vec::new(), true);
        report.warning("axis undefined").unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert!(text.contains("axis undefined"));
        assert!(text.starts_with('\u{1b}'));
    }
}
