use std::fmt::Debug;

use crate::arena::Arena;

use super::super::types::RbNode;

/// Renders the subtree under `node` one node per line, children indented
/// below their parent.
pub fn print<K, V>(arena: &Arena<RbNode<K, V>>, node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i];
            let color = if n.b { "black" } else { "red" };
            let nested = format!("{tab}  ");
            let left = print(arena, n.l, &nested);
            let right = print(arena, n.r, &nested);
            format!(
                "Node[{i}] {color} {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.k, n.v
            )
        }
    }
}
