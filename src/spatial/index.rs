use crate::{core::bounds::Bounds, MapError, Result};
use rstar::{RTree, RTreeObject, AABB};

/// A symbol footprint tracked by the index, in screen coordinates
#[derive(Debug, Clone)]
pub struct IndexedSymbol {
    pub id: String,
    pub layer_id: String,
    pub bounds: Bounds,
    /// Draw order: higher is rendered on top
    z: u64,
}

impl IndexedSymbol {
    pub fn z_order(&self) -> u64 {
        self.z
    }
}

impl PartialEq for IndexedSymbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for IndexedSymbol {}

// --- rstar integration -------------------------------------------------------------------------

impl RTreeObject for IndexedSymbol {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.min.x, self.bounds.min.y],
            [self.bounds.max.x, self.bounds.max.y],
        )
    }
}

/// R-tree based index of rendered symbol footprints.
///
/// Hosts keep one of these in sync with the renderer's current frame and answer
/// `query_rendered_features` from it: `query` returns matches topmost first,
/// matching draw order, so the first result is the one a hit test should grab.
pub struct SymbolIndex {
    rtree: RTree<IndexedSymbol>,
    next_z: u64,
}

impl SymbolIndex {
    pub fn new() -> Self {
        Self {
            rtree: RTree::new(),
            next_z: 0,
        }
    }

    /// Adds a symbol footprint. Later insertions render on top of earlier ones.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        layer_id: impl Into<String>,
        bounds: Bounds,
    ) -> Result<()> {
        let id = id.into();
        if !bounds.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "invalid bounds for symbol {id}: {bounds:?}"
            )));
        }
        if self.contains(&id) {
            return Err(MapError::Layer(format!("duplicate symbol id: {id}")));
        }

        let z = self.next_z;
        self.next_z += 1;
        self.rtree.insert(IndexedSymbol {
            id,
            layer_id: layer_id.into(),
            bounds,
            z,
        });
        Ok(())
    }

    /// Returns the symbols of `layer_id` intersecting `rect`, topmost first.
    pub fn query(&self, rect: &Bounds, layer_id: &str) -> Vec<&IndexedSymbol> {
        let envelope = AABB::from_corners([rect.min.x, rect.min.y], [rect.max.x, rect.max.y]);
        let mut results: Vec<&IndexedSymbol> = self
            .rtree
            .locate_in_envelope_intersecting(&envelope)
            .filter(|symbol| symbol.layer_id == layer_id)
            .collect();
        results.sort_by(|a, b| b.z.cmp(&a.z));
        results
    }

    /// Removes a symbol, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<IndexedSymbol> {
        // First find the element immutably, clone it, then remove mutably.
        let found = self.rtree.iter().find(|symbol| symbol.id == id).cloned();
        found.and_then(|symbol| self.rtree.remove(&symbol))
    }

    /// Moves a symbol's footprint, keeping its draw order.
    pub fn set_bounds(&mut self, id: &str, bounds: Bounds) -> Result<()> {
        if !bounds.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "invalid bounds for symbol {id}: {bounds:?}"
            )));
        }
        let mut symbol = self
            .remove(id)
            .ok_or_else(|| MapError::Layer(format!("unknown symbol id: {id}")))?;
        symbol.bounds = bounds;
        self.rtree.insert(symbol);
        Ok(())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rtree.iter().any(|symbol| symbol.id == id)
    }

    pub fn len(&self) -> usize {
        self.rtree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.rtree.size() == 0
    }
}

impl Default for SymbolIndex {
    fn default() -> Self {
        Self::new()
    }
}
