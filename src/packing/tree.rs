use crate::error::{AtlasError, Result};

/// One region of the atlas in the binary pack tree.
///
/// A free node (`used == false`) is a leaf that can still accept a tile. A
/// used node is internal and always has both children: `down` covers the
/// strip below the placed tile, `right` the strip beside it.
#[derive(Debug, Clone)]
struct Node {
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    used: bool,
    down: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn free(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            used: false,
            down: None,
            right: None,
        }
    }
}

/// Growing binary-tree bin packer.
///
/// Nodes live in an arena addressed by index; children never reference
/// ancestors, and the whole arena is dropped with the packer after one run.
/// The bounding box starts at the first rectangle's size and is extended
/// right or down whenever a rectangle does not fit, preferring whichever
/// direction keeps the box closer to square.
#[derive(Debug)]
pub struct GrowingPacker {
    nodes: Vec<Node>,
    root: usize,
}

impl GrowingPacker {
    /// Seed the tree with a single free node of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            nodes: vec![Node::free(0, 0, width, height)],
            root: 0,
        }
    }

    /// Current bounding box of the tree.
    pub fn bounds(&self) -> (u32, u32) {
        let root = &self.nodes[self.root];
        (root.width, root.height)
    }

    /// Place one `w`x`h` rectangle, growing the bounding box if necessary.
    ///
    /// Returns the top-left corner of the placed region. `Ok(None)` means
    /// the box grew but the retry still found no fit, which violates a tree
    /// invariant; `Err` means no growth direction could accept the tile.
    pub fn place(&mut self, w: u32, h: u32) -> Result<Option<(u32, u32)>> {
        match self.find_node(self.root, w, h) {
            Some(idx) => Ok(Some(self.split_node(idx, w, h))),
            None => self.grow_node(w, h),
        }
    }

    /// Depth-first search for a free node that fits, right subtree before
    /// down, matching the order placements were carved out in.
    fn find_node(&self, idx: usize, w: u32, h: u32) -> Option<usize> {
        let node = &self.nodes[idx];
        if node.used {
            node.right
                .and_then(|right| self.find_node(right, w, h))
                .or_else(|| node.down.and_then(|down| self.find_node(down, w, h)))
        } else if w <= node.width && h <= node.height {
            Some(idx)
        } else {
            None
        }
    }

    /// Mark a free node used and carve the leftover space into a `down`
    /// strip (full width, below) and a `right` strip (beside, tile height).
    fn split_node(&mut self, idx: usize, w: u32, h: u32) -> (u32, u32) {
        let (x, y, width, height) = {
            let node = &self.nodes[idx];
            (node.x, node.y, node.width, node.height)
        };

        let down = self.push(Node::free(x, y + h, width, height - h));
        let right = self.push(Node::free(x + w, y, width - w, h));

        let node = &mut self.nodes[idx];
        node.used = true;
        node.down = Some(down);
        node.right = Some(right);

        (x, y)
    }

    /// Extend the bounding box for a rectangle no existing free node fits.
    ///
    /// Growing right requires the tile to span no more than the current
    /// height (and vice versa for down), so the fresh strip is guaranteed to
    /// accept it. The `should_*` tests bias growth toward whichever
    /// direction keeps the box near-square; this rule is kept exactly as-is
    /// so existing layouts reproduce pixel-for-pixel.
    fn grow_node(&mut self, w: u32, h: u32) -> Result<Option<(u32, u32)>> {
        let (root_w, root_h) = self.bounds();

        let can_grow_down = w <= root_w;
        let can_grow_right = h <= root_h;
        let should_grow_right = can_grow_right && root_h >= root_w + w;
        let should_grow_down = can_grow_down && root_w >= root_h + h;

        if should_grow_right {
            self.grow_right(w, h)
        } else if should_grow_down {
            self.grow_down(w, h)
        } else if can_grow_right {
            self.grow_right(w, h)
        } else if can_grow_down {
            self.grow_down(w, h)
        } else {
            Err(AtlasError::PackingExhausted {
                width: w,
                height: h,
            })
        }
    }

    fn grow_right(&mut self, w: u32, h: u32) -> Result<Option<(u32, u32)>> {
        let (root_w, root_h) = self.bounds();

        let strip = self.push(Node::free(root_w, 0, w, root_h));
        let new_root = self.push(Node {
            x: 0,
            y: 0,
            width: root_w + w,
            height: root_h,
            used: true,
            down: Some(self.root),
            right: Some(strip),
        });
        self.root = new_root;

        self.retry_after_growth(w, h)
    }

    fn grow_down(&mut self, w: u32, h: u32) -> Result<Option<(u32, u32)>> {
        let (root_w, root_h) = self.bounds();

        let strip = self.push(Node::free(0, root_h, root_w, h));
        let new_root = self.push(Node {
            x: 0,
            y: 0,
            width: root_w,
            height: root_h + h,
            used: true,
            down: Some(strip),
            right: Some(self.root),
        });
        self.root = new_root;

        self.retry_after_growth(w, h)
    }

    /// Growth always created a strip at least `w`x`h`, so this find cannot
    /// fail for valid inputs; a miss indicates a broken tree invariant.
    fn retry_after_growth(&mut self, w: u32, h: u32) -> Result<Option<(u32, u32)>> {
        Ok(self
            .find_node(self.root, w, h)
            .map(|idx| self.split_node(idx, w, h)))
    }

    fn push(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}
