//! Infinite pattern-free strings.
//!
//! An infinite string over the alphabet avoids every pattern iff the goto
//! graph restricted to safe (not dangerous) nodes has a cycle reachable from
//! the root.

use super::automaton::AhoCorasick;
use super::{NodeId, ROOT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Colour {
    White,
    /// On the current DFS path
    Grey,
    Black,
}

impl AhoCorasick {
    /// Whether some cycle of safe nodes is reachable from the root.
    ///
    /// Iterative three-colour DFS over `go`; dangerous nodes are never
    /// entered.
    pub fn has_safe_cycle(&mut self) -> bool {
        if self.is_dangerous(ROOT) {
            return false;
        }

        let symbols = self.alphabet().len();
        let mut colour = vec![Colour::White; self.node_count()];
        // (node, next symbol to try)
        let mut stack: Vec<(NodeId, usize)> = vec![(ROOT, 0)];
        colour[ROOT] = Colour::Grey;

        while let Some(top) = stack.last_mut() {
            let (node, symbol) = *top;
            if symbol == symbols {
                colour[node] = Colour::Black;
                stack.pop();
                continue;
            }
            top.1 += 1;

            let next = self.go(node, symbol);
            if self.is_dangerous(next) {
                continue;
            }
            match colour[next] {
                Colour::Grey => return true,
                Colour::White => {
                    colour[next] = Colour::Grey;
                    stack.push((next, 0));
                }
                Colour::Black => {}
            }
        }

        false
    }
}
