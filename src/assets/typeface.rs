//! Typeface Description Parsing
//!
//! The font arrives as a three.js-style `typeface.json` document: a glyph
//! table keyed by character, each glyph carrying a horizontal advance and an
//! outline program: a whitespace-separated command string in font units.
//!
//! Supported outline commands:
//!
//! | Token | Meaning            | Operands                        |
//! |-------|--------------------|---------------------------------|
//! | `m`   | move to            | `x y`                           |
//! | `l`   | line to            | `x y`                           |
//! | `q`   | quadratic curve to | `x y cx cy`                     |
//! | `b`   | cubic curve to     | `x y c1x c1y c2x c2y`           |
//!
//! Subpaths are closed implicitly: each `m` ends the previous contour.

use std::collections::HashMap;

use glam::Vec2;
use serde::Deserialize;

use crate::errors::{IntroError, Result};

/// One glyph entry of the typeface table.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGlyph {
    /// Horizontal advance in font units.
    #[serde(default)]
    pub ha: f32,

    /// Outline command string. Empty for blank glyphs such as the space.
    #[serde(default)]
    pub o: String,
}

/// The deserialized typeface document.
#[derive(Debug, Clone, Deserialize)]
pub struct TypefaceData {
    /// Glyph table keyed by the character it renders.
    pub glyphs: HashMap<String, RawGlyph>,

    /// Design units per em; glyph coordinates are scaled by
    /// `size / resolution`.
    pub resolution: f32,

    /// Human-readable face name, used for log messages only.
    #[serde(rename = "familyName", default)]
    pub family_name: String,
}

/// A single parsed outline command, in font units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutlineCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
}

/// Parses a glyph outline command string into a command list.
///
/// Curve operands store the end point first, then the control points; the
/// typeface serialization order, not the usual path-API order.
pub fn parse_outline(outline: &str) -> Result<Vec<OutlineCommand>> {
    let mut tokens = outline.split_ascii_whitespace();
    let mut commands = Vec::new();

    while let Some(op) = tokens.next() {
        match op {
            "m" => {
                let to = next_point(&mut tokens)?;
                commands.push(OutlineCommand::MoveTo(to));
            }
            "l" => {
                let to = next_point(&mut tokens)?;
                commands.push(OutlineCommand::LineTo(to));
            }
            "q" => {
                let to = next_point(&mut tokens)?;
                let ctrl = next_point(&mut tokens)?;
                commands.push(OutlineCommand::QuadTo { ctrl, to });
            }
            "b" => {
                let to = next_point(&mut tokens)?;
                let ctrl1 = next_point(&mut tokens)?;
                let ctrl2 = next_point(&mut tokens)?;
                commands.push(OutlineCommand::CubicTo { ctrl1, ctrl2, to });
            }
            other => {
                return Err(IntroError::TypefaceParseError(format!(
                    "unknown outline command {other:?}"
                )));
            }
        }
    }

    Ok(commands)
}

fn next_f32<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<f32> {
    let token = tokens.next().ok_or_else(|| {
        IntroError::TypefaceParseError("outline ended mid-command".to_string())
    })?;
    token.parse::<f32>().map_err(|_| {
        IntroError::TypefaceParseError(format!("bad outline coordinate {token:?}"))
    })
}

fn next_point<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<Vec2> {
    let x = next_f32(tokens)?;
    let y = next_f32(tokens)?;
    Ok(Vec2::new(x, y))
}
