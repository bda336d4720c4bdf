//! Debug table dump, matching the teacher library's `Display` impl for its
//! own mesh representation (one `tabled::Table` per arena).

use std::fmt::{self, Display};

use tabled::Tabled;
use tabled::Table;

use crate::geometry::traits::RealNumber;

use super::QuadEdgeMesh;

#[derive(Tabled)]
struct EdgeRow {
    id: u32,
    origin: u32,
    sym: u32,
    onext: u32,
    oprev: u32,
    boundary: bool,
    deleted: bool,
}

#[derive(Tabled)]
struct PointRow {
    id: u32,
    edge: u32,
    deleted: bool,
}

impl<S: RealNumber> Display for QuadEdgeMesh<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = Table::new(self.edges.iter().enumerate().map(|(i, e)| EdgeRow {
            id: i as u32,
            origin: e.origin.0,
            sym: e.sym.0,
            onext: e.onext.0,
            oprev: e.oprev.0,
            boundary: e.is_boundary(),
            deleted: e.deleted(),
        }));
        let points = Table::new(self.points.iter().enumerate().map(|(i, p)| PointRow {
            id: i as u32,
            edge: p.edge.0,
            deleted: p.deleted,
        }));

        writeln!(f, "### POINTS ###")?;
        writeln!(f, "{points}")?;
        writeln!(f)?;
        writeln!(f, "### EDGES ###")?;
        writeln!(f, "{edges}")
    }
}
