/// Command-line front end: parses raw text into rotkit inputs and prints the results
use anyhow::Context;
use clap::{Parser, Subcommand};
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use rotkit_core::parse::{parse_axis_step, parse_matrix, parse_triple};
use rotkit_core::{Axis, AxisAngle, Convention, Extractor, RotationSource, Transform};
use std::io::Write;

pub mod report;

pub use report::Report;

/// Rotation matrices, Euler angles and rigid transforms
#[derive(Parser, Debug)]
#[command(name = "rotkit", version)]
pub struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Build a rotation matrix from three angles in degrees
    Build {
        /// Angle convention: xyz (fixed), zyx or zyz (Euler)
        convention: Convention,
        /// Three angles, e.g. "30 45 60"
        #[arg(value_parser = parse_triple, allow_hyphen_values = true)]
        angles: [f64; 3],
    },
    /// Build a rotation matrix from an axis and an angle
    AxisAngle {
        /// Rotation axis, normalized before use, e.g. "1 0 0"
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        axis: [f64; 3],
        /// Angle in degrees
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
    },
    /// Recover ZYX, ZYZ and axis-angle parameters from a rotation matrix
    Extract {
        /// Nine entries in row-major order, e.g. "0.5 -0.866 0; 0.866 0.5 0; 0 0 1"
        #[arg(value_parser = parse_matrix, allow_hyphen_values = true)]
        matrix: Matrix3<f64>,
        /// Boundary of the degenerate branches
        #[arg(long, default_value_t = Extractor::DEFAULT_EPSILON)]
        epsilon: f64,
    },
    /// Chain axis rotations and a translation, then move a point
    Transform {
        /// Rotation step "axis:degrees", repeatable; multiplied left to right
        #[arg(long = "rotate", value_parser = parse_axis_step, allow_hyphen_values = true)]
        rotations: Vec<(Axis, f64)>,
        /// Translation appended after the rotations, e.g. "10 5 6"
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        translate: Option<[f64; 3]>,
        /// Point to transform, e.g. "1 2 3"
        #[arg(long, value_parser = parse_triple, allow_hyphen_values = true)]
        point: [f64; 3],
    },
}

/// Runs commands against a report sink
pub struct App<W: Write> {
    report: Report<W>,
}

impl<W: Write> App<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            report: Report::new(out, color),
        }
    }

    pub fn into_inner(self) -> W {
        self.report.into_inner()
    }

    pub fn run(&mut self, command: &Command) -> anyhow::Result<()> {
        log::debug!("Running {command:?}");

        match command {
            Command::Build { convention, angles } => self.build(*convention, *angles),
            Command::AxisAngle { axis, angle } => self.axis_angle(*axis, *angle),
            Command::Extract { matrix, epsilon } => {
                self.extract(matrix, Extractor::with_epsilon(*epsilon))
            }
            Command::Transform {
                rotations,
                translate,
                point,
            } => self.transform(rotations, *translate, *point),
        }?;

        self.report.flush().context("failed to flush output")
    }

    fn build(&mut self, convention: Convention, angles: [f64; 3]) -> anyhow::Result<()> {
        let names = match convention {
            Convention::XyzFixed => ["gamma (X)", "beta (Y)", "alpha (Z)"],
            Convention::ZyxEuler => ["alpha (Z)", "beta (Y)", "gamma (X)"],
            Convention::ZyzEuler => ["alpha (Z)", "beta (Y)", "gamma (Z)"],
        };
        let m = convention.build(angles);

        self.report.heading(convention.name())?;
        self.report.angles(names, angles)?;
        self.report.matrix3("R", &m)?;
        Ok(())
    }

    fn axis_angle(&mut self, axis: [f64; 3], angle: f64) -> anyhow::Result<()> {
        let [x, y, z] = axis;
        let rotation = AxisAngle::new(Vector3::new(x, y, z), angle)
            .context("cannot build an axis-angle rotation")?;

        self.report.heading("Axis-angle")?;
        self.report
            .point("k", &Point3::from(rotation.axis.into_inner()))?;
        self.report.text(&format!("theta = {angle:.4}°"))?;
        self.report.matrix3("R", &rotation.to_matrix())?;
        Ok(())
    }

    fn extract(&mut self, m: &Matrix3<f64>, extractor: Extractor) -> anyhow::Result<()> {
        self.report.matrix3("R", m)?;

        for convention in [Convention::ZyxEuler, Convention::ZyzEuler] {
            let extraction = extractor.euler(convention, m);
            self.report.blank()?;
            self.report.heading(convention.name())?;
            self.report.derivation(&extraction.derivation)?;
            self.report
                .angles(["gamma", "beta", "alpha"], extraction.angles)?;
        }

        self.report.blank()?;
        self.report.heading("Axis-angle")?;
        match extractor.axis_angle(m) {
            Ok(extraction) => {
                self.report.derivation(&extraction.derivation)?;
                self.report.point(
                    "k",
                    &Point3::from(extraction.rotation.axis.into_inner()),
                )?;
                self.report
                    .text(&format!("theta = {:.4}°", extraction.rotation.degrees))?;
            }
            // An undefined axis is an expected answer, not a failed command
            Err(err) => self.report.warning(&err.to_string())?,
        }
        Ok(())
    }

    fn transform(
        &mut self,
        rotations: &[(Axis, f64)],
        translate: Option<[f64; 3]>,
        point: [f64; 3],
    ) -> anyhow::Result<()> {
        let mut chain: Vec<Matrix4<f64>> = rotations
            .iter()
            .map(|&(axis, degrees)| {
                Transform::build(&RotationSource::Axis { axis, degrees }, &Vector3::zeros())
            })
            .collect();
        if let Some([x, y, z]) = translate {
            chain.push(Transform::translation(&Vector3::new(x, y, z)));
        }

        let t = Transform::compose(&chain);
        let [x, y, z] = point;
        let p = Point3::new(x, y, z);

        self.report.heading("Homogeneous transform")?;
        self.report.matrix4("T", &t)?;
        self.report.point("p", &p)?;
        self.report.point("T p", &Transform::apply(&t, &p))?;
        Ok(())
    }
}
