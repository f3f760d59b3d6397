//! SVG path data parser.
//!
//! Tokenizes a `d` attribute string into command letters and numbers, then
//! resolves every command to absolute coordinates. Supports the full
//! command set `m/l/h/v/c/s/q/t/a/z` (and uppercase forms), implicit
//! command repetition (extra argument groups after one letter), and the
//! smooth-curve reflection rules for `S`/`T`.
//!
//! Unknown command letters and wrong argument counts are hard errors;
//! nothing is dropped silently.

use extrudekit_core::{ParseError, ParseResult, Point2D};
use smallvec::SmallVec;

use super::PathCommand;

/// Token produced by the path data tokenizer.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

/// Running pen state threaded through the parse loop.
///
/// Carries the current point, the subpath start used for closing, and the
/// control points that `S`/`T` reflect. Keeping this in one value (rather
/// than loose locals or instance fields) makes the reflection rules easy
/// to exercise in isolation.
#[derive(Debug, Clone, Copy, Default)]
struct PenState {
    current: Point2D,
    subpath_start: Point2D,
    last_cubic_ctrl: Option<Point2D>,
    last_quad_ctrl: Option<Point2D>,
}

impl PenState {
    /// Resolves a coordinate pair against the current point when relative.
    fn resolve(&self, relative: bool, x: f64, y: f64) -> Point2D {
        if relative {
            Point2D::new(self.current.x + x, self.current.y + y)
        } else {
            Point2D::new(x, y)
        }
    }

    /// Any non-curve command breaks the smooth-reflection chain.
    fn reset_reflection(&mut self) {
        self.last_cubic_ctrl = None;
        self.last_quad_ctrl = None;
    }

    /// First control point for a smooth cubic (`S`) command.
    ///
    /// Reflection of the previous cubic's second control point through the
    /// current point; collapses to the current point (zero tangent) when
    /// the previous command was not a cubic.
    fn reflected_cubic_ctrl(&self) -> Point2D {
        match self.last_cubic_ctrl {
            Some(ctrl) => ctrl.reflected_through(self.current),
            None => self.current,
        }
    }

    /// Control point for a smooth quadratic (`T`) command.
    fn reflected_quad_ctrl(&self) -> Point2D {
        match self.last_quad_ctrl {
            Some(ctrl) => ctrl.reflected_through(self.current),
            None => self.current,
        }
    }
}

fn flush_number(buf: &mut String, tokens: &mut Vec<Token>) -> ParseResult<()> {
    if buf.is_empty() {
        return Ok(());
    }
    match buf.parse::<f64>() {
        Ok(value) => {
            tokens.push(Token::Number(value));
            buf.clear();
            Ok(())
        }
        Err(_) => Err(ParseError::InvalidNumber {
            token: std::mem::take(buf),
        }),
    }
}

/// Tokenize path data into command letters and numbers.
///
/// Splits on whitespace and commas, and on `+`/`-` when they begin a new
/// number (`10-5` -> `10`, `-5`), while preserving scientific notation
/// (`1e-5` stays one token).
fn tokenize(path_data: &str) -> ParseResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut buf = String::new();

    for ch in path_data.chars() {
        match ch {
            // Exponent marker inside a number, e.g. `1e5` / `2E-3`.
            'e' | 'E' if !buf.is_empty() => buf.push(ch),
            c if c.is_ascii_alphabetic() => {
                flush_number(&mut buf, &mut tokens)?;
                tokens.push(Token::Command(c));
            }
            ' ' | ',' | '\t' | '\n' | '\r' => flush_number(&mut buf, &mut tokens)?,
            '-' | '+' => {
                if buf.is_empty() || matches!(buf.chars().last(), Some('e' | 'E')) {
                    buf.push(ch);
                } else {
                    flush_number(&mut buf, &mut tokens)?;
                    buf.push(ch);
                }
            }
            _ => buf.push(ch),
        }
    }

    flush_number(&mut buf, &mut tokens)?;
    Ok(tokens)
}

/// The argument run after a letter must hold at least one complete group
/// and no partial group at the end.
fn expect_groups(letter: char, args: &[f64], group_size: usize) -> ParseResult<()> {
    if args.is_empty() || args.len() % group_size != 0 {
        return Err(ParseError::MalformedArguments {
            command: letter,
            got: args.len(),
            expected: group_size,
        });
    }
    Ok(())
}

/// Parse SVG path data into resolved drawing commands.
///
/// All emitted coordinates are absolute; relative commands, axis-only
/// lines and smooth reflection are resolved here so downstream stages
/// never track pen state.
pub fn parse(path_data: &str) -> ParseResult<Vec<PathCommand>> {
    let tokens = tokenize(path_data)?;
    let mut commands = Vec::new();
    let mut pen = PenState::default();
    let mut index = 0;

    while index < tokens.len() {
        let letter = match tokens[index] {
            Token::Command(c) => c,
            // Only reachable for numbers ahead of the first letter; every
            // later number is consumed by the argument loop below.
            Token::Number(_) => return Err(ParseError::MissingInitialCommand),
        };
        index += 1;

        let mut args: SmallVec<[f64; 8]> = SmallVec::new();
        while let Some(Token::Number(value)) = tokens.get(index) {
            args.push(*value);
            index += 1;
        }

        let relative = letter.is_ascii_lowercase();
        match letter.to_ascii_uppercase() {
            'M' => {
                expect_groups(letter, &args, 2)?;
                for (group_index, pair) in args.chunks_exact(2).enumerate() {
                    let point = pen.resolve(relative, pair[0], pair[1]);
                    if group_index == 0 {
                        commands.push(PathCommand::MoveTo(point));
                        pen.subpath_start = point;
                    } else {
                        // Extra pairs after a moveto are implicit linetos.
                        commands.push(PathCommand::LineTo(point));
                    }
                    pen.current = point;
                }
                pen.reset_reflection();
            }
            'L' => {
                expect_groups(letter, &args, 2)?;
                for pair in args.chunks_exact(2) {
                    let point = pen.resolve(relative, pair[0], pair[1]);
                    commands.push(PathCommand::LineTo(point));
                    pen.current = point;
                }
                pen.reset_reflection();
            }
            'H' => {
                expect_groups(letter, &args, 1)?;
                for value in &args {
                    let x = if relative { pen.current.x + value } else { *value };
                    let point = Point2D::new(x, pen.current.y);
                    commands.push(PathCommand::LineTo(point));
                    pen.current = point;
                }
                pen.reset_reflection();
            }
            'V' => {
                expect_groups(letter, &args, 1)?;
                for value in &args {
                    let y = if relative { pen.current.y + value } else { *value };
                    let point = Point2D::new(pen.current.x, y);
                    commands.push(PathCommand::LineTo(point));
                    pen.current = point;
                }
                pen.reset_reflection();
            }
            'C' => {
                expect_groups(letter, &args, 6)?;
                for group in args.chunks_exact(6) {
                    let ctrl1 = pen.resolve(relative, group[0], group[1]);
                    let ctrl2 = pen.resolve(relative, group[2], group[3]);
                    let end = pen.resolve(relative, group[4], group[5]);
                    commands.push(PathCommand::CubicTo { ctrl1, ctrl2, end });
                    pen.current = end;
                    pen.last_cubic_ctrl = Some(ctrl2);
                    pen.last_quad_ctrl = None;
                }
            }
            'S' => {
                expect_groups(letter, &args, 4)?;
                for group in args.chunks_exact(4) {
                    let ctrl1 = pen.reflected_cubic_ctrl();
                    let ctrl2 = pen.resolve(relative, group[0], group[1]);
                    let end = pen.resolve(relative, group[2], group[3]);
                    commands.push(PathCommand::CubicTo { ctrl1, ctrl2, end });
                    pen.current = end;
                    pen.last_cubic_ctrl = Some(ctrl2);
                    pen.last_quad_ctrl = None;
                }
            }
            'Q' => {
                expect_groups(letter, &args, 4)?;
                for group in args.chunks_exact(4) {
                    let ctrl = pen.resolve(relative, group[0], group[1]);
                    let end = pen.resolve(relative, group[2], group[3]);
                    commands.push(PathCommand::QuadraticTo { ctrl, end });
                    pen.current = end;
                    pen.last_quad_ctrl = Some(ctrl);
                    pen.last_cubic_ctrl = None;
                }
            }
            'T' => {
                expect_groups(letter, &args, 2)?;
                for pair in args.chunks_exact(2) {
                    let ctrl = pen.reflected_quad_ctrl();
                    let end = pen.resolve(relative, pair[0], pair[1]);
                    commands.push(PathCommand::QuadraticTo { ctrl, end });
                    pen.current = end;
                    // The synthesized control point feeds the next T.
                    pen.last_quad_ctrl = Some(ctrl);
                    pen.last_cubic_ctrl = None;
                }
            }
            'A' => {
                expect_groups(letter, &args, 7)?;
                for group in args.chunks_exact(7) {
                    let end = pen.resolve(relative, group[5], group[6]);
                    commands.push(PathCommand::ArcTo {
                        rx: group[0],
                        ry: group[1],
                        rotation: group[2].to_radians(),
                        large_arc: group[3] != 0.0,
                        sweep: group[4] != 0.0,
                        end,
                    });
                    pen.current = end;
                }
                pen.reset_reflection();
            }
            'Z' => {
                if !args.is_empty() {
                    return Err(ParseError::MalformedArguments {
                        command: letter,
                        got: args.len(),
                        expected: 0,
                    });
                }
                commands.push(PathCommand::Close);
                pen.current = pen.subpath_start;
                pen.reset_reflection();
            }
            _ => return Err(ParseError::UnsupportedCommand(letter)),
        }
    }

    Ok(commands)
}
