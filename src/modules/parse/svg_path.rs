use crate::data::{BezierSpline, JointMode, Point};
use crate::error::{SplineError, SplineResult};

/// Parse SVG path data into a spline lying in the XY plane
///
/// Supported commands are `M`, `L`, `C` and `Z`, absolute and relative. Lines
/// become cubic segments with their handles at one and two thirds, and a
/// closed path becomes a looped spline. Only a single subpath is accepted.
pub trait FromSvgPath: Sized {
    /// Parse from SVG path data string
    fn from_svg_path(data: &str) -> SplineResult<Self>;
}

impl FromSvgPath for BezierSpline {
    fn from_svg_path(data: &str) -> SplineResult<Self> {
        let mut builder = PathBuilder::new();
        let mut current_command = None;

        let mut numbers = vec![];
        let mut current_number = String::new();

        // Process each character
        for c in data.chars() {
            match c {
                'M' | 'm' | 'C' | 'c' | 'L' | 'l' | 'Z' | 'z' => {
                    flush_number(&mut current_number, &mut numbers)?;

                    // Process previous command's numbers
                    apply_command(&mut builder, current_command, &numbers)?;
                    numbers.clear();

                    current_command = Some(c);
                }
                '-' | '+' => {
                    // a sign starts a new number unless it belongs to an exponent
                    if !current_number.ends_with(['e', 'E']) {
                        flush_number(&mut current_number, &mut numbers)?;
                    }
                    current_number.push(c);
                }
                '0'..='9' | '.' | 'e' | 'E' => {
                    current_number.push(c);
                }
                ',' | ' ' | '\t' | '\n' | '\r' => {
                    flush_number(&mut current_number, &mut numbers)?;
                }
                _ => {
                    return Err(SplineError::Parse(format!(
                        "unsupported character '{}' in path data",
                        c
                    )))
                }
            }
        }

        // Process final command
        flush_number(&mut current_number, &mut numbers)?;
        apply_command(&mut builder, current_command, &numbers)?;

        builder.finish()
    }
}

fn flush_number(current_number: &mut String, numbers: &mut Vec<f64>) -> SplineResult<()> {
    if current_number.is_empty() {
        return Ok(());
    }
    let number = current_number
        .parse::<f64>()
        .map_err(|e| SplineError::Parse(format!("invalid number '{}': {}", current_number, e)))?;
    numbers.push(number);
    current_number.clear();
    Ok(())
}

fn apply_command(
    builder: &mut PathBuilder,
    command: Option<char>,
    numbers: &[f64],
) -> SplineResult<()> {
    let Some(command) = command else {
        if numbers.is_empty() {
            return Ok(());
        }
        return Err(SplineError::Parse(
            "path data must start with a move command".to_string(),
        ));
    };

    let relative = command.is_ascii_lowercase();
    match command.to_ascii_uppercase() {
        'M' => {
            let pairs = coordinates(command, numbers, 2)?;
            let (first, rest) = pairs.split_at(2);
            builder.move_to(builder.resolve(first[0], first[1], relative))?;
            // extra pairs after a move are implicit line commands
            for pair in rest.chunks(2) {
                builder.line_to(builder.resolve(pair[0], pair[1], relative))?;
            }
        }
        'L' => {
            for pair in coordinates(command, numbers, 2)?.chunks(2) {
                builder.line_to(builder.resolve(pair[0], pair[1], relative))?;
            }
        }
        'C' => {
            for chunk in coordinates(command, numbers, 6)?.chunks(6) {
                let p1 = builder.resolve(chunk[0], chunk[1], relative);
                let p2 = builder.resolve(chunk[2], chunk[3], relative);
                let p3 = builder.resolve(chunk[4], chunk[5], relative);
                builder.curve_to(p1, p2, p3)?;
            }
        }
        _ => {
            if !numbers.is_empty() {
                return Err(SplineError::Parse(format!(
                    "'{}' takes no arguments, got {}",
                    command,
                    numbers.len()
                )));
            }
            builder.close()?;
        }
    }
    Ok(())
}

/// The arguments of `command`, checked to form whole groups of `group` numbers.
fn coordinates(command: char, numbers: &[f64], group: usize) -> SplineResult<&[f64]> {
    if numbers.is_empty() || numbers.len() % group != 0 {
        return Err(SplineError::Parse(format!(
            "'{}' expects groups of {} numbers, got {}",
            command,
            group,
            numbers.len()
        )));
    }
    Ok(numbers)
}

#[derive(Debug)]
struct PathBuilder {
    points: Vec<Point>,
    current: Point,
    start: Point,
    closed: bool,
}

impl PathBuilder {
    fn new() -> Self {
        Self {
            points: vec![],
            current: Point::origin(),
            start: Point::origin(),
            closed: false,
        }
    }

    fn resolve(&self, x: f64, y: f64, relative: bool) -> Point {
        if relative {
            Point::new(self.current.x + x, self.current.y + y, 0.0)
        } else {
            Point::new(x, y, 0.0)
        }
    }

    fn move_to(&mut self, point: Point) -> SplineResult<()> {
        if !self.points.is_empty() {
            return Err(SplineError::Parse(
                "paths with more than one subpath are not supported".to_string(),
            ));
        }
        self.current = point;
        self.start = point;
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> SplineResult<()> {
        let step = (point - self.current) / 3.0;
        self.curve_to(self.current + step, self.current + step * 2.0, point)
    }

    fn curve_to(&mut self, p1: Point, p2: Point, p3: Point) -> SplineResult<()> {
        if self.closed {
            return Err(SplineError::Parse(
                "drawing after closing the path is not supported".to_string(),
            ));
        }
        if self.points.is_empty() {
            self.points.push(self.current);
        }
        self.points.extend([p1, p2, p3]);
        self.current = p3;
        Ok(())
    }

    fn close(&mut self) -> SplineResult<()> {
        if self.points.is_empty() {
            return Err(SplineError::Parse(
                "cannot close a path without segments".to_string(),
            ));
        }
        if self.current != self.start {
            self.line_to(self.start)?;
        }
        self.closed = true;
        self.current = self.start;
        Ok(())
    }

    fn finish(self) -> SplineResult<BezierSpline> {
        if self.points.is_empty() {
            return Err(SplineError::Parse(
                "Cannot create spline from empty path".to_string(),
            ));
        }
        let modes = vec![JointMode::Free; self.points.len() / 3 + 1];
        BezierSpline::from_parts(self.points, modes, self.closed)
    }
}
