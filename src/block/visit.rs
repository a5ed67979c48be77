//! Path addressing for block forests.
//!
//! A path is the index route from the forest root to a node. Pre-order
//! paths let callers walk every node and edit one node at a time
//! without holding references into the tree.

use super::node::BlockNode;

/// Index route from the forest root to a node.
pub type BlockPath = Vec<usize>;

/// All node paths in pre-order (parents before their children).
pub fn paths(blocks: &[BlockNode]) -> Vec<BlockPath> {
    let mut all = Vec::new();
    collect(blocks, &mut Vec::new(), &mut all);
    all
}

fn collect(blocks: &[BlockNode], prefix: &mut Vec<usize>, all: &mut Vec<BlockPath>) {
    for (index, block) in blocks.iter().enumerate() {
        prefix.push(index);
        all.push(prefix.clone());
        collect(&block.inner_blocks, prefix, all);
        prefix.pop();
    }
}

pub fn get<'a>(blocks: &'a [BlockNode], path: &[usize]) -> Option<&'a BlockNode> {
    let (&first, rest) = path.split_first()?;
    let block = blocks.get(first)?;
    if rest.is_empty() {
        Some(block)
    } else {
        get(&block.inner_blocks, rest)
    }
}

pub fn get_mut<'a>(blocks: &'a mut [BlockNode], path: &[usize]) -> Option<&'a mut BlockNode> {
    let (&first, rest) = path.split_first()?;
    let block = blocks.get_mut(first)?;
    if rest.is_empty() {
        Some(block)
    } else {
        get_mut(&mut block.inner_blocks, rest)
    }
}
