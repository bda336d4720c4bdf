//! The iteration driver (§4.G): ties the priority queue, the mapper, the
//! join-vertex operator and a pair of pluggable collaborators together into
//! a convergent decimation loop.

use tracing::{debug, trace, warn};

use crate::{
    error::DecimationError,
    geometry::traits::RealNumber,
    mesh::{EdgeId, QuadEdgeMesh},
};

use super::{
    criteria::CriterionAdapter,
    edge_key::{canonical, CanonicalEdge},
    join_vertex::{self, Outcome},
    mapper::QueueMapper,
    neighborhood::affected_edges,
    priority::PriorityQueue,
    relocator::Relocator,
    repair,
};

/// `relocate`/`check_orientation` knobs (§6). `check_orientation` is
/// accepted but not yet consulted; flipping-triangle detection is reserved.
#[derive(Debug, Clone, Copy)]
pub struct DecimationConfig {
    pub relocate: bool,
    pub check_orientation: bool,
}

impl Default for DecimationConfig {
    fn default() -> Self {
        Self {
            relocate: true,
            check_orientation: false,
        }
    }
}

/// Multiple of `|E|` the driver will run past before emitting the P6
/// trip-wire warning (§13).
const ITERATION_WARNING_MULTIPLE: usize = 10;

/// Owns the queue, the mapper and the iteration counter for one decimation
/// run over a borrowed mesh.
pub struct Decimator<S: RealNumber> {
    queue: PriorityQueue<CanonicalEdge, S>,
    mapper: QueueMapper<CanonicalEdge>,
    config: DecimationConfig,
    count: usize,
    initial_edge_count: usize,
    warned: bool,
}

impl<S: RealNumber> Decimator<S> {
    /// Builds a driver and fills the queue from every edge currently in
    /// `mesh`. Fails if `mesh` isn't a valid 2-manifold quad-edge structure.
    pub fn new(
        mesh: &QuadEdgeMesh<S>,
        config: DecimationConfig,
        criterion: &impl CriterionAdapter<S>,
    ) -> Result<Self, DecimationError> {
        if !mesh.is_manifold() {
            return Err(DecimationError::NonManifoldMesh);
        }

        let mut queue = PriorityQueue::new();
        let mut mapper = QueueMapper::new();
        let mut initial_edge_count = 0;

        for e in mesh.edges() {
            let key = canonical(mesh, e);
            let measure = criterion.measure(mesh, key.edge());
            let slot = queue.push(key, measure);
            mapper.insert(key, slot);
            initial_edge_count += 1;
        }

        trace!(edges = initial_edge_count, "queue filled");

        Ok(Self {
            queue,
            mapper,
            config,
            count: 0,
            initial_edge_count,
            warned: false,
        })
    }

    pub fn iteration_count(&self) -> usize {
        self.count
    }

    /// Runs the loop to completion: queue exhaustion or `criterion`
    /// satisfied. Returns `Err` only on a collaborator contract violation.
    pub fn run(
        &mut self,
        mesh: &mut QuadEdgeMesh<S>,
        criterion: &impl CriterionAdapter<S>,
        relocator: &impl Relocator<S>,
    ) -> Result<(), DecimationError> {
        while self.step(mesh, criterion, relocator)? {}
        Ok(())
    }

    /// Runs a single iteration. Returns `Ok(true)` if it made progress and
    /// the caller should call `step` again, `Ok(false)` once the loop is
    /// done (queue empty or criterion satisfied).
    pub fn step(
        &mut self,
        mesh: &mut QuadEdgeMesh<S>,
        criterion: &impl CriterionAdapter<S>,
        relocator: &impl Relocator<S>,
    ) -> Result<bool, DecimationError> {
        trace!(count = self.count, queue_len = self.queue.len(), "iteration start");

        let Some((_, _, measure, _)) = self.queue.peek() else {
            trace!("queue empty, stopping");
            return Ok(false);
        };

        if criterion.is_satisfied(mesh, self.count, measure) {
            trace!(count = self.count, "criterion satisfied, stopping");
            return Ok(false);
        }

        let Some((key, _measure, dead)) = self.extract_valid(mesh) else {
            trace!("queue drained while discarding stale entries, stopping");
            return Ok(false);
        };

        if dead {
            debug!(count = self.count, "tombstone hit at extraction");
            self.count += 1;
            self.warn_if_excessive();
            trace!(count = self.count, queue_len = self.queue.len(), "iteration end");
            return Ok(true);
        }

        self.process(mesh, key, criterion, relocator)?;
        self.count += 1;
        self.warn_if_excessive();
        trace!(count = self.count, queue_len = self.queue.len(), "iteration end");
        Ok(true)
    }

    fn warn_if_excessive(&mut self) {
        if self.warned {
            return;
        }
        let limit = self.initial_edge_count.saturating_mul(ITERATION_WARNING_MULTIPLE);
        if limit > 0 && self.count > limit {
            warn!(
                count = self.count,
                initial_edges = self.initial_edge_count,
                "decimation has run past {}x the initial edge count without the criterion being satisfied",
                ITERATION_WARNING_MULTIPLE
            );
            self.warned = true;
        }
    }

    /// Pops entries, discarding ones `is_edge_ok` rejects, until a keepable
    /// entry surfaces or the queue drains.
    fn extract_valid(&mut self, mesh: &QuadEdgeMesh<S>) -> Option<(CanonicalEdge, S, bool)> {
        loop {
            let (key, measure, dead) = self.queue.pop()?;
            self.mapper.remove(&key);
            if dead || is_edge_ok(mesh, key.edge()) {
                return Some((key, measure, dead));
            }
        }
    }

    fn process(
        &mut self,
        mesh: &mut QuadEdgeMesh<S>,
        key: CanonicalEdge,
        criterion: &impl CriterionAdapter<S>,
        relocator: &impl Relocator<S>,
    ) -> Result<(), DecimationError> {
        let e = key.edge();
        let saved_ring: Vec<EdgeId> = affected_edges(mesh, e)
            .into_iter()
            .filter(|&a| a != e && a != mesh.sym(e))
            .collect();
        for &a in &saved_ring {
            let k = canonical(mesh, a);
            if let Some(slot) = self.mapper.remove(&k) {
                self.queue.delete(slot);
            }
        }

        // Asked before the mutation, while e's endpoints still exist; always
        // called so a caller-provided relocator runs regardless of whether
        // its result ends up applied. Only applied below, and only if
        // config.relocate is set, if the collapse actually succeeds.
        let wanted_position = relocator.relocate(mesh, e);

        match join_vertex::evaluate(mesh, e) {
            Outcome::Success { old_id, new_id } => {
                mesh.delete_point(old_id);
                if self.config.relocate {
                    match wanted_position {
                        Some(pos) => mesh.set_point(new_id, pos),
                        None => {
                            return Err(DecimationError::NullPoint {
                                context: "relocator after successful collapse",
                            })
                        }
                    }
                }
                debug!(count = self.count, old = old_id.0, new = new_id.0, "collapse succeeded");

                let mut new_ring = Vec::new();
                if let Some(start) = mesh.find_edge(new_id) {
                    let mut cur = start;
                    loop {
                        new_ring.push(cur);
                        cur = mesh.onext(cur);
                        if cur == start {
                            break;
                        }
                    }
                }
                for a in new_ring {
                    self.push_or_update(mesh, a, criterion);
                }
            }
            Outcome::Fail(status) => {
                debug!(count = self.count, edge = e.0, status = ?status, "collapse refused");
                for a in repair::edges_to_tag_out(mesh, e, status) {
                    self.tag_out(mesh, a);
                }
                for &a in &saved_ring {
                    self.push_or_update(mesh, a, criterion);
                }
            }
        }

        Ok(())
    }

    /// `push_or_update` (§4.E): live slot gets its measure recomputed, dead
    /// slot stays dead and untouched (tombstone wins), absent key gets
    /// inserted live.
    fn push_or_update(&mut self, mesh: &QuadEdgeMesh<S>, e: EdgeId, criterion: &impl CriterionAdapter<S>) {
        let key = canonical(mesh, e);
        match self.mapper.get(&key) {
            Some(slot) if self.queue.is_dead(slot) => {}
            Some(slot) => {
                let measure = criterion.measure(mesh, key.edge());
                self.queue.update(slot, false, measure);
            }
            None => {
                let measure = criterion.measure(mesh, key.edge());
                let slot = self.queue.push(key, measure);
                self.mapper.insert(key, slot);
            }
        }
    }

    /// `TagElementOut` (§4.F): marks the canonical entry for `e` dead with
    /// measure zero, inserting it if it isn't already tracked.
    fn tag_out(&mut self, mesh: &QuadEdgeMesh<S>, e: EdgeId) {
        let key = canonical(mesh, e);
        match self.mapper.get(&key) {
            Some(slot) => self.queue.update(slot, true, S::zero()),
            None => {
                let slot = self.queue.push(key, S::zero());
                self.queue.update(slot, true, S::zero());
                self.mapper.insert(key, slot);
            }
        }
    }
}

fn is_edge_ok<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> bool {
    if e.is_none() || e.0 as usize >= mesh.edges.len() {
        return false;
    }
    let o = mesh.origin(e);
    let d = mesh.destination(e);
    if o.is_none() || d.is_none() {
        return false;
    }
    if mesh.find_edge(o).is_none() || mesh.find_edge(d).is_none() {
        return false;
    }
    if mesh.find_edge_between(o, d).is_none() {
        return false;
    }
    !mesh.sym(e).is_none()
}
