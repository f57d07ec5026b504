//! Custom glyph outlines from path data.
//!
//! Accepts the straight-segment subset of SVG path syntax so a chart can use
//! any polygonal glyph (stars, crosses, pins) as a marker.

use glam::{DVec2, dvec2};
use miette::NamedSource;
use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::errors::GlyphError;
use crate::geometry::{Figure, Geometry};

#[derive(Parser)]
#[grammar = "glyph.pest"]
struct GlyphParser;

const SOURCE_NAME: &str = "<glyph>";

/// Parse glyph path data into a geometry.
///
/// Empty input yields an empty geometry. Subpaths with fewer than two points
/// draw nothing and are dropped.
pub fn parse_glyph(source: &str) -> Result<Geometry, GlyphError> {
    let mut pairs = GlyphParser::parse(Rule::glyph, source).map_err(|e| {
        let (start, end) = match e.location {
            InputLocation::Pos(p) => (p, p),
            InputLocation::Span((s, end)) => (s, end),
        };
        GlyphError::Syntax {
            message: e.variant.message().into_owned(),
            src: NamedSource::new(SOURCE_NAME, source.to_string()),
            span: (start, end.saturating_sub(start)).into(),
        }
    })?;

    let mut outline = OutlineBuilder::default();
    let Some(glyph) = pairs.next() else {
        return Ok(Geometry::empty());
    };

    for command in glyph.into_inner() {
        let rule = command.as_rule();
        match rule {
            Rule::move_abs | Rule::move_rel => {
                let relative = rule == Rule::move_rel;
                for (i, pair) in command.into_inner().enumerate() {
                    let p = coord_pair(pair, source)?;
                    let target = if relative { outline.current + p } else { p };
                    // Pairs after the first are implicit line-tos.
                    if i == 0 {
                        outline.move_to(target);
                    } else {
                        outline.line_to(target);
                    }
                }
            }
            Rule::line_abs | Rule::line_rel => {
                let relative = rule == Rule::line_rel;
                for pair in command.into_inner() {
                    let p = coord_pair(pair, source)?;
                    outline.line_to(if relative { outline.current + p } else { p });
                }
            }
            Rule::horiz_abs | Rule::horiz_rel => {
                for n in command.into_inner() {
                    let x = number(n, source)?;
                    let x = if rule == Rule::horiz_rel { outline.current.x + x } else { x };
                    outline.line_to(dvec2(x, outline.current.y));
                }
            }
            Rule::vert_abs | Rule::vert_rel => {
                for n in command.into_inner() {
                    let y = number(n, source)?;
                    let y = if rule == Rule::vert_rel { outline.current.y + y } else { y };
                    outline.line_to(dvec2(outline.current.x, y));
                }
            }
            Rule::close => outline.close(),
            _ => {}
        }
    }

    Ok(outline.finish())
}

fn coord_pair(pair: Pair<'_, Rule>, source: &str) -> Result<DVec2, GlyphError> {
    let mut inner = pair.into_inner();
    let x = inner.next().map(|n| number(n, source)).transpose()?.unwrap_or_default();
    let y = inner.next().map(|n| number(n, source)).transpose()?.unwrap_or_default();
    Ok(dvec2(x, y))
}

fn number(pair: Pair<'_, Rule>, source: &str) -> Result<f64, GlyphError> {
    let span = pair.as_span();
    let text = pair.as_str();
    let value: f64 = text.parse().map_err(|_| GlyphError::Syntax {
        message: format!("`{text}` is not a number"),
        src: NamedSource::new(SOURCE_NAME, source.to_string()),
        span: (span.start(), text.len()).into(),
    })?;
    if !value.is_finite() {
        return Err(GlyphError::NonFinite {
            value: text.to_string(),
            src: NamedSource::new(SOURCE_NAME, source.to_string()),
            span: (span.start(), text.len()).into(),
        });
    }
    Ok(value)
}

/// Accumulates subpaths while walking path commands
#[derive(Debug, Default)]
struct OutlineBuilder {
    current: DVec2,
    start: DVec2,
    points: Vec<DVec2>,
    figures: Vec<Figure>,
}

impl OutlineBuilder {
    fn move_to(&mut self, p: DVec2) {
        self.flush(false);
        self.points.push(p);
        self.start = p;
        self.current = p;
    }

    fn line_to(&mut self, p: DVec2) {
        // A line after a close continues from the closed subpath's start.
        if self.points.is_empty() {
            self.points.push(self.current);
            self.start = self.current;
        }
        self.points.push(p);
        self.current = p;
    }

    fn close(&mut self) {
        if !self.points.is_empty() {
            self.flush(true);
            self.current = self.start;
        }
    }

    fn flush(&mut self, closed: bool) {
        let points = std::mem::take(&mut self.points);
        if points.len() >= 2 {
            self.figures.push(Figure::Polyline { points, closed });
        }
    }

    fn finish(mut self) -> Geometry {
        self.flush(false);
        Geometry::from_figures(self.figures)
    }
}
