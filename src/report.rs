// =============================================================================
// Area reporter
// =============================================================================

use crate::shape::Shape;
use std::io::{self, Write};
use tracing::debug;

/// Computes the area of any shape; the generic bound rejects non-shapes at
/// compile time.
pub fn compute_area<S: Shape + ?Sized>(shape: &S) -> f64 {
    shape.area()
}

/// Renders an area the way the reporter prints it, e.g. `The area is: 78.5`.
///
/// `f64`'s `Display` is the shortest round-trip form, so whole numbers print
/// without a fractional part (`24`, not `24.0`).
pub fn format_area(area: f64) -> String {
    format!("The area is: {area}")
}

/// Writes one line per reported shape to a caller-provided channel.
pub struct AreaReporter<W: Write> {
    out: W,
    reported: usize,
}

impl<W: Write> AreaReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, reported: 0 }
    }

    /// Reports `shape` and hands back the area it printed.
    pub fn report(&mut self, shape: &dyn Shape) -> io::Result<f64> {
        let area = compute_area(shape);
        writeln!(self.out, "{}", format_area(area))?;
        self.reported += 1;
        debug!(area, reported = self.reported, "reported area");
        Ok(area)
    }

    pub fn report_all<'a, I>(&mut self, shapes: I) -> io::Result<Vec<f64>>
    where
        I: IntoIterator<Item = &'a dyn Shape>,
    {
        shapes.into_iter().map(|shape| self.report(shape)).collect()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Prints `shape`'s area on stdout.
pub fn print_area(shape: &impl Shape) -> io::Result<()> {
    let stdout = io::stdout();
    AreaReporter::new(stdout.lock()).report(shape)?;
    Ok(())
}
