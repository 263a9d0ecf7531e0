//! Recursive move-tree search with iterative deepening.
//!
//! Each node keeps its move, a cached score, and its children, and the tree
//! is retained across deepening passes: scores computed by the previous,
//! shallower pass order the next one. Quiet moves beyond the per-node cap
//! are marked pruned and short-circuit to a static evaluation if revisited.
//! Tactically unstable horizon nodes (a capture just landed, or the side to
//! move is in check) are extended one level instead of being evaluated.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Color;
use crate::game_state::position::Position;
use crate::move_generation::generator::legal_moves;
use crate::moves::move_encoding::{Move, MOVE_NONE};
use crate::search::board_scoring::{evaluate_at, MATE_THRESHOLD};

/// Quiet (non-capturing) children expanded per node; the rest are pruned.
pub const QUIET_MOVE_CAP: usize = 5;

/// Hard ceiling on depth-from-root, bounding recursion regardless of the
/// caller's requested depths.
pub const MAX_SEARCH_PLY: u32 = 32;

#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Move that produced this node; `MOVE_NONE` at the root.
    pub mv: Move,
    pub score: i32,
    /// Whether `mv` was a capture in the parent position.
    pub capture: bool,
    /// Pruned nodes are not expanded; they carry a static evaluation.
    pub pruned: bool,
    pub children: Vec<SearchNode>,
}

impl SearchNode {
    pub fn root() -> Self {
        Self {
            mv: MOVE_NONE,
            score: 0,
            capture: false,
            pruned: false,
            children: Vec::new(),
        }
    }

    fn from_move(mv: Move, capture: bool) -> Self {
        Self {
            mv,
            score: 0,
            capture,
            pruned: false,
            children: Vec::new(),
        }
    }

    /// Best move found for the side to move at this node. Children are kept
    /// best-first after every search pass.
    pub fn best_move(&self) -> Option<Move> {
        self.children.first().map(|child| child.mv)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Nominal depth the iterative wrapper works up to.
    pub max_depth: u32,
    /// Depth-from-root cap shared by nominal search and extensions.
    pub max_ply: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            max_ply: MAX_SEARCH_PLY,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub reached_depth: u32,
    pub root: SearchNode,
}

/// Single fixed-depth search from a fresh tree.
pub fn search(position: &Position, depth: u32, max_ply: u32) -> Result<SearchNode, ChessErrors> {
    let mut root = SearchNode::root();
    search_into(position, depth, 0, max_ply.min(MAX_SEARCH_PLY), &mut root)?;
    Ok(root)
}

/// Iterative deepening: re-search the same tree from depth 1 upward so each
/// pass is ordered by the last one, stopping early once a forced mate is
/// proven (deeper search cannot improve it).
pub fn iterative_deepening_search(
    position: &Position,
    config: SearchConfig,
) -> Result<SearchResult, ChessErrors> {
    let max_ply = config.max_ply.min(MAX_SEARCH_PLY);
    let mut root = SearchNode::root();
    let mut reached_depth = 0;

    for depth in 1..=config.max_depth {
        search_into(position, depth, 0, max_ply, &mut root)?;
        reached_depth = depth;
        if root.score.abs() >= MATE_THRESHOLD {
            break;
        }
    }

    Ok(SearchResult {
        best_move: root.best_move(),
        score: root.score,
        reached_depth,
        root,
    })
}

fn search_into(
    position: &Position,
    depth: u32,
    depth_from_root: u32,
    max_ply: u32,
    node: &mut SearchNode,
) -> Result<(), ChessErrors> {
    if node.pruned {
        node.score = evaluate_at(position, depth_from_root);
        return Ok(());
    }

    if depth_from_root > max_ply {
        node.score = evaluate_at(position, depth_from_root);
        return Ok(());
    }

    let depth = if depth == 0 {
        let tactical = node.capture || position.is_check();
        if !tactical {
            node.score = evaluate_at(position, depth_from_root);
            return Ok(());
        }
        // Quiescence extension: keep looking one level past the horizon
        // while the position stays tactical; `max_ply` still bounds it.
        1
    } else {
        depth
    };

    if node.children.is_empty() {
        let moves = legal_moves(position);
        if moves.is_empty() {
            // Mate or stalemate; the evaluation encodes which.
            node.score = evaluate_at(position, depth_from_root);
            return Ok(());
        }
        node.children = moves
            .into_iter()
            .map(|mv| SearchNode::from_move(mv, position.is_capture(mv)))
            .collect();
    }

    let maximizing = position.side_to_move == Color::Light;
    order_children(node, maximizing);

    for child in &mut node.children {
        let mut next = position.clone();
        next.do_move(child.mv)?;
        search_into(&next, depth - 1, depth_from_root + 1, max_ply, child)?;
    }

    sort_by_score(&mut node.children, maximizing);
    node.score = match node.children.first() {
        Some(best) => best.score,
        None => evaluate_at(position, depth_from_root),
    };
    Ok(())
}

/// Sort captures and quiets separately by the scores cached from the last
/// pass, cap the quiet group, and merge the two ordered groups back into a
/// single best-first list.
fn order_children(node: &mut SearchNode, maximizing: bool) {
    let mut captures = Vec::with_capacity(node.children.len());
    let mut quiets = Vec::with_capacity(node.children.len());
    for child in node.children.drain(..) {
        if child.capture {
            captures.push(child);
        } else {
            quiets.push(child);
        }
    }

    sort_by_score(&mut captures, maximizing);
    sort_by_score(&mut quiets, maximizing);

    for (slot, quiet) in quiets.iter_mut().enumerate() {
        quiet.pruned = slot >= QUIET_MOVE_CAP;
    }

    node.children = merge_by_score(captures, quiets, maximizing);
}

/// Stable sort, best score first for the side to move.
fn sort_by_score(nodes: &mut [SearchNode], maximizing: bool) {
    if maximizing {
        nodes.sort_by(|a, b| b.score.cmp(&a.score));
    } else {
        nodes.sort_by(|a, b| a.score.cmp(&b.score));
    }
}

fn merge_by_score(
    captures: Vec<SearchNode>,
    quiets: Vec<SearchNode>,
    maximizing: bool,
) -> Vec<SearchNode> {
    let mut merged = Vec::with_capacity(captures.len() + quiets.len());
    let mut capture_iter = captures.into_iter();
    let mut quiet_iter = quiets.into_iter();
    let mut next_capture = capture_iter.next();
    let mut next_quiet = quiet_iter.next();

    loop {
        match (next_capture.take(), next_quiet.take()) {
            (Some(capture), Some(quiet)) => {
                let capture_first = if maximizing {
                    capture.score >= quiet.score
                } else {
                    capture.score <= quiet.score
                };
                if capture_first {
                    merged.push(capture);
                    next_quiet = Some(quiet);
                    next_capture = capture_iter.next();
                } else {
                    merged.push(quiet);
                    next_capture = Some(capture);
                    next_quiet = quiet_iter.next();
                }
            }
            (Some(capture), None) => {
                merged.push(capture);
                merged.extend(capture_iter);
                break;
            }
            (None, Some(quiet)) => {
                merged.push(quiet);
                merged.extend(quiet_iter);
                break;
            }
            (None, None) => break,
        }
    }

    merged
}
