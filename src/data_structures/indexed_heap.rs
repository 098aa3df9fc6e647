use crate::algorithm::distance::Distance;
use crate::graph::Weight;

/// Binary min-heap over vertex IDs keyed by an external distance array.
///
/// Alongside the heap array it keeps the position of every live vertex, which makes
/// `decrease_key` O(log V) without searching. Invariant: `positions[heap[i]] == Some(i)`
/// for every live slot `i`, and `positions[v] == None` for vertices not in the heap.
/// All slot writes go through [`IndexedMinHeap::place`].
#[derive(Debug, Clone)]
pub struct IndexedMinHeap {
    heap: Vec<usize>,
    positions: Vec<Option<usize>>,
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn left(index: usize) -> usize {
    2 * index + 1
}

impl IndexedMinHeap {
    /// Creates an empty heap able to hold vertices `0..capacity`
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedMinHeap {
            heap: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
        }
    }

    /// Builds a heap holding every vertex of `dist`, ordered by it.
    pub fn with_vertices<W: Weight>(dist: &[Distance<W>]) -> Self {
        let n = dist.len();
        let mut heap = IndexedMinHeap {
            heap: (0..n).collect(),
            positions: (0..n).map(Some).collect(),
        };
        for index in (0..n / 2).rev() {
            heap.sift_down(index, dist);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns `true` if `vertex` is still in the heap
    pub fn contains(&self, vertex: usize) -> bool {
        matches!(self.positions.get(vertex), Some(Some(_)))
    }

    /// Vertex with the smallest distance, without removing it
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Adds a vertex that is not yet in the heap. Returns false if it already is.
    pub fn push<W: Weight>(&mut self, vertex: usize, dist: &[Distance<W>]) -> bool {
        if vertex >= self.positions.len() {
            self.positions.resize(vertex + 1, None);
        }
        if self.contains(vertex) {
            return false;
        }
        self.heap.push(vertex);
        let index = self.heap.len() - 1;
        self.positions[vertex] = Some(index);
        self.sift_up(index, dist);
        true
    }

    /// Removes and returns the vertex with the smallest distance.
    ///
    /// The root is swapped with the last live slot, the live range shrinks by one and the
    /// new root sifts down. Returns `None` on an empty heap.
    pub fn extract_min<W: Weight>(&mut self, dist: &[Distance<W>]) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        let min = self.heap[0];
        self.swap(0, last);
        self.heap.pop();
        self.positions[min] = None;
        if !self.heap.is_empty() {
            self.sift_down(0, dist);
        }
        Some(min)
    }

    /// Restores heap order after `dist[vertex]` was lowered by the caller.
    ///
    /// Returns false, leaving the heap untouched, if `vertex` is not in the heap.
    pub fn decrease_key<W: Weight>(&mut self, vertex: usize, dist: &[Distance<W>]) -> bool {
        match self.positions.get(vertex).copied().flatten() {
            Some(index) => {
                self.sift_up(index, dist);
                true
            }
            None => false,
        }
    }

    /// Checks the position map and the heap property against `dist`
    pub fn is_valid<W: Weight>(&self, dist: &[Distance<W>]) -> bool {
        let positions_ok = self
            .heap
            .iter()
            .enumerate()
            .all(|(index, &vertex)| self.positions[vertex] == Some(index));
        let live = self.positions.iter().filter(|p| p.is_some()).count();
        let order_ok = (1..self.heap.len()).all(|i| dist[self.heap[parent(i)]] <= dist[self.heap[i]]);
        positions_ok && live == self.heap.len() && order_ok
    }

    fn place(&mut self, index: usize, vertex: usize) {
        self.heap[index] = vertex;
        self.positions[vertex] = Some(index);
    }

    fn swap(&mut self, a: usize, b: usize) {
        let (va, vb) = (self.heap[a], self.heap[b]);
        self.place(a, vb);
        self.place(b, va);
    }

    fn sift_up<W: Weight>(&mut self, mut index: usize, dist: &[Distance<W>]) {
        while index > 0 {
            let up = parent(index);
            if dist[self.heap[up]] <= dist[self.heap[index]] {
                break;
            }
            self.swap(up, index);
            index = up;
        }
    }

    fn sift_down<W: Weight>(&mut self, mut index: usize, dist: &[Distance<W>]) {
        let len = self.heap.len();
        loop {
            let mut child = left(index);
            if child >= len {
                break;
            }
            if child + 1 < len && dist[self.heap[child + 1]] < dist[self.heap[child]] {
                child += 1;
            }
            if dist[self.heap[child]] >= dist[self.heap[index]] {
                break;
            }
            self.swap(index, child);
            index = child;
        }
    }
}
