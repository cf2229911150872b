/// Text parsers for raw user input: angle triples, axes, matrices and axis steps
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{multispace0, multispace1, one_of, space0},
    combinator::{all_consuming, map, opt, recognize, verify},
    multi::count,
    number::complete::double,
    sequence::{delimited, preceded, separated_pair, terminated, tuple},
    IResult,
};

use nalgebra::{Matrix3, Vector3};

use crate::axis::{Axis, AxisAngle};
use crate::error::{RotationError, RotationResult};

/// Parse three numbers separated by whitespace and/or commas, e.g. `30 45 60`
pub fn parse_triple(input: &str) -> RotationResult<[f64; 3]> {
    match all_consuming(delimited(multispace0, triple, multispace0))(input) {
        Ok((_, values)) => Ok(values),
        Err(_) => Err(RotationError::parse("three numbers", input)),
    }
}

/// Parse a single angle in degrees
pub fn parse_angle(input: &str) -> RotationResult<f64> {
    let parsed: IResult<&str, f64> =
        all_consuming(delimited(multispace0, number, multispace0))(input);
    match parsed {
        Ok((_, value)) => Ok(value),
        Err(_) => Err(RotationError::parse("an angle in degrees", input)),
    }
}

/// Parse an axis vector and an angle; the axis is normalized
pub fn parse_axis_angle(axis: &str, angle: &str) -> RotationResult<AxisAngle> {
    let [x, y, z] = parse_triple(axis)?;
    AxisAngle::new(Vector3::new(x, y, z), parse_angle(angle)?)
}

/// Parse nine numbers in row-major order.
///
/// Rows may be separated by `;` or newlines, entries by whitespace or commas:
/// `0.5 -0.866 0; 0.866 0.5 0; 0 0 1`.
pub fn parse_matrix(input: &str) -> RotationResult<Matrix3<f64>> {
    let rows = all_consuming(delimited(
        multispace0,
        tuple((
            terminated(triple, row_separator),
            terminated(triple, row_separator),
            triple,
        )),
        preceded(multispace0, terminated(opt_semicolon, multispace0)),
    ))(input);

    match rows {
        Ok((_, (r1, r2, r3))) => Ok(Matrix3::new(
            r1[0], r1[1], r1[2], //
            r2[0], r2[1], r2[2], //
            r3[0], r3[1], r3[2],
        )),
        Err(_) => Err(RotationError::parse("nine numbers (three rows)", input)),
    }
}

/// Parse an `axis:degrees` step such as `x:30`
pub fn parse_axis_step(input: &str) -> RotationResult<(Axis, f64)> {
    let parsed: IResult<&str, (char, f64)> = all_consuming(delimited(
        multispace0,
        separated_pair(
            one_of("xyzXYZ"),
            delimited(space0, tag(":"), space0),
            number,
        ),
        multispace0,
    ))(input);

    match parsed {
        Ok((_, (label, degrees))) => Ok((label.to_string().parse::<Axis>()?, degrees)),
        Err(_) => {
            // Give a precise error when only the label is wrong
            let label = input.split(':').next().unwrap_or_default().trim();
            if input.contains(':') && label.parse::<Axis>().is_err() {
                return Err(RotationError::InvalidAxisLabel {
                    label: label.to_string(),
                });
            }
            Err(RotationError::parse("axis:degrees", input))
        }
    }
}

fn triple(input: &str) -> IResult<&str, [f64; 3]> {
    let (input, first) = number(input)?;
    let (input, rest) = count(preceded(value_separator, number), 2)(input)?;
    Ok((input, [first, rest[0], rest[1]]))
}

/// A finite float; `nan` and `inf` are rejected
fn number(input: &str) -> IResult<&str, f64> {
    verify(double, |v: &f64| v.is_finite())(input)
}

fn value_separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((space0, tag(","), space0))),
        multispace1,
    ))(input)
}

fn row_separator(input: &str) -> IResult<&str, &str> {
    alt((
        recognize(tuple((multispace0, tag(";"), multispace0))),
        multispace1,
    ))(input)
}

fn opt_semicolon(input: &str) -> IResult<&str, ()> {
    map(opt(tag(";")), |_| ())(input)
}
