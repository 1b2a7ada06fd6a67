// disjoint set union over node indices, used for component enumeration
// See: https://www.cs.princeton.edu/~wayne/kleinberg-tardos/pdf/UnionFind-2x2.pdf

#[derive(Debug)]
pub(crate) struct DisjointSetUnion {
    parents: Vec<usize>,
    ranks: Vec<usize>,
}

impl DisjointSetUnion {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            parents: (0..n).collect(),
            ranks: vec![0; n],
        }
    }

    pub(crate) fn union(&mut self, x: usize, y: usize) {
        let r = self.find(x);
        let s = self.find(y);

        if r == s {
            return;
        }

        match self.ranks[r].cmp(&self.ranks[s]) {
            std::cmp::Ordering::Greater => {
                self.parents[s] = r;
            }
            std::cmp::Ordering::Less => {
                self.parents[r] = s;
            }
            std::cmp::Ordering::Equal => {
                self.parents[r] = s;
                self.ranks[s] += 1;
            }
        }
    }

    #[cfg(test)]
    fn in_same_set(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    pub(crate) fn find(&mut self, mut x: usize) -> usize {
        while self.parents[x] != x {
            self.parents[x] = self.parents[self.parents[x]]; //path halving
            x = self.parents[x];
        }
        x
    }
}

#[test]
fn test_union() {
    let mut dsu = DisjointSetUnion::new(5);
    dsu.union(0, 1);
    dsu.union(2, 3);
    dsu.union(1, 2);
    assert!(dsu.in_same_set(0, 2));
    assert!(dsu.in_same_set(1, 3));
    assert!(dsu.in_same_set(0, 3));
    assert!(!dsu.in_same_set(4, 2));

    // union with itself
    let mut dsu = DisjointSetUnion::new(5);
    dsu.union(0, 0);
    assert!(dsu.in_same_set(0, 0));
    assert!(!dsu.in_same_set(0, 1));
}

#[test]
fn test_find_on_deep_trees() {
    // equal-rank unions build a tree of depth > 2, which must still
    // resolve every member to the same root
    let mut dsu = DisjointSetUnion::new(8);
    for k in [1, 2, 4] {
        for i in (0..8).step_by(2 * k) {
            dsu.union(i, i + k);
        }
    }
    let root = dsu.find(0);
    for i in 0..8 {
        assert_eq!(dsu.find(i), root);
    }
}
