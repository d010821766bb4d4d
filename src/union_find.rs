/// Union-Find (Disjoint Sets) over dense integer slots
///
/// Union by size, path halving on find. Slots are handed out in insertion
/// order by `push`, so slot order is registration order.
use indexmap::IndexMap;

#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl UnionFind {
    /// Create a new UnionFind with n singleton elements
    pub fn new(n: usize) -> Self {
        let parent = (0..n).collect();
        let size = vec![1; n];
        UnionFind { parent, size }
    }

    /// Add a singleton element and return its slot
    pub fn push(&mut self) -> usize {
        let slot = self.parent.len();
        self.parent.push(slot);
        self.size.push(1);
        slot
    }

    /// Find the root of element x, pointing each visited node at its grandparent
    pub fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Union the sets containing x and y. Returns false if they were already joined.
    ///
    /// The smaller tree goes under the larger root; on a tie x's tree is
    /// attached under y's root.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        if self.size[root_x] > self.size[root_y] {
            self.parent[root_y] = root_x;
            self.size[root_x] += self.size[root_y];
        } else {
            self.parent[root_x] = root_y;
            self.size[root_y] += self.size[root_x];
        }
        true
    }

    /// Check if two elements are in the same set
    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Number of elements in the set containing x
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Get all sets as groups of slots.
    ///
    /// Groups appear in order of their first member; members stay in slot order.
    pub fn get_sets(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut root_to_group: IndexMap<usize, Vec<usize>> = IndexMap::new();

        for i in 0..n {
            let root = self.find(i);
            root_to_group.entry(root).or_default().push(i);
        }

        root_to_group.into_values().collect()
    }
}
