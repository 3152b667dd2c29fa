use std::{cmp::Ordering, collections::BinaryHeap};

use log::{debug, trace};

use crate::{
    error::{HuffmanError, Result},
    frequency::FrequencyTable,
};

#[derive(Debug, PartialEq, Eq)]
pub enum HuffmanTree {
    Node(usize, Box<HuffmanTree>, Box<HuffmanTree>),
    Leaf(usize, char),
}

impl HuffmanTree {
    /// Builds the tree by repeatedly merging the two lightest subtrees.
    ///
    /// Ties on weight are broken by queue order: leaves are queued in
    /// ascending symbol order, and each merged node is queued after every
    /// node that already exists. The lighter node extracted first becomes the
    /// left child.
    pub fn create(counts: &FrequencyTable) -> Result<HuffmanTree> {
        if counts.is_empty() {
            return Err(HuffmanError::InvalidInput);
        }

        let mut heap = BinaryHeap::new();
        let mut order = 0;
        for (symbol, count) in counts.iter() {
            heap.push(Queued::new(HuffmanTree::Leaf(count, symbol), order));
            order += 1;
        }

        loop {
            let left = heap.pop().ok_or(HuffmanError::InvalidInput)?;
            let Some(right) = heap.pop() else {
                debug!(
                    "built tree with {} leaves and weight {}",
                    left.tree.leaf_count(),
                    left.weight
                );
                return Ok(left.tree);
            };

            trace!(
                "merging weights {} (#{}) and {} (#{})",
                left.weight,
                left.order,
                right.weight,
                right.order
            );
            let node = HuffmanTree::Node(
                left.weight + right.weight,
                Box::new(left.tree),
                Box::new(right.tree),
            );
            heap.push(Queued::new(node, order));
            order += 1;
        }
    }

    pub fn weight(&self) -> usize {
        match self {
            HuffmanTree::Leaf(count, _) => *count,
            HuffmanTree::Node(count, _, _) => *count,
        }
    }

    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanTree::Leaf(_, _) => 1,
            HuffmanTree::Node(_, left, right) => left.leaf_count() + right.leaf_count(),
        }
    }
}

/// A subtree waiting in the merge queue.
struct Queued {
    weight: usize,
    order: usize,
    tree: HuffmanTree,
}

impl Queued {
    fn new(tree: HuffmanTree, order: usize) -> Self {
        Queued {
            weight: tree.weight(),
            order,
            tree,
        }
    }
}

// BinaryHeap is a max-heap, so the comparison is reversed to pop the
// lightest, oldest entry first.
impl Ord for Queued {
    fn cmp(&self, other: &Self) -> Ordering {
        (other.weight, other.order).cmp(&(self.weight, self.order))
    }
}

impl PartialOrd for Queued {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Queued {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Queued {}

#[cfg(test)]
mod tests {
    use crate::{
        error::HuffmanError,
        frequency::FrequencyTable,
        tree::HuffmanTree::{self, Leaf, Node},
    };

    #[test]
    fn test_create_huffman_tree() {
        let counts = FrequencyTable::from_text("mississippi");
        let tree = HuffmanTree::create(&counts).unwrap();
        assert_eq!(
            tree,
            Node(
                11,
                Box::new(Leaf(4, 's')),
                Box::new(Node(
                    7,
                    Box::new(Node(3, Box::new(Leaf(1, 'm')), Box::new(Leaf(2, 'p')))),
                    Box::new(Leaf(4, 'i')),
                )),
            )
        );
    }

    #[test]
    fn builds_over_unicode_symbols() {
        let counts = FrequencyTable::from_text("🦀éé");
        let tree = HuffmanTree::create(&counts).unwrap();
        assert_eq!(
            tree,
            Node(3, Box::new(Leaf(1, '🦀')), Box::new(Leaf(2, 'é')))
        );
    }

    #[test]
    fn ties_go_to_the_oldest_node() {
        let counts = FrequencyTable::from_text("abracadabra");
        let tree = HuffmanTree::create(&counts).unwrap();
        assert_eq!(
            tree,
            Node(
                11,
                Box::new(Leaf(5, 'a')),
                Box::new(Node(
                    6,
                    Box::new(Node(2, Box::new(Leaf(1, 'c')), Box::new(Leaf(1, 'd')))),
                    Box::new(Node(4, Box::new(Leaf(2, 'b')), Box::new(Leaf(2, 'r')))),
                )),
            )
        );
    }

    #[test]
    fn single_symbol_is_a_leaf() {
        let counts = FrequencyTable::from_text("aaaa");
        let tree = HuffmanTree::create(&counts).unwrap();
        assert_eq!(tree, Leaf(4, 'a'));
    }

    #[test]
    fn one_leaf_per_symbol() {
        // char_mapping test data comes from
        // https://opendsa-server.cs.vt.edu/ODSA/Books/CS3/html/Huffman.html
        let counts: FrequencyTable = [
            ('C', 32),
            ('D', 42),
            ('E', 120),
            ('K', 7),
            ('L', 42),
            ('M', 24),
            ('U', 37),
            ('Z', 2),
        ]
        .into_iter()
        .collect();
        let tree = HuffmanTree::create(&counts).unwrap();
        assert_eq!(tree.weight(), 306);
        assert_eq!(tree.leaf_count(), 8);
    }

    #[test]
    fn empty_table_is_rejected() {
        let counts = FrequencyTable::from_text("");
        assert_eq!(
            HuffmanTree::create(&counts),
            Err(HuffmanError::InvalidInput)
        );
    }
}
