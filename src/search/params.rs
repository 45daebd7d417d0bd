//! Engineering constants for the search heuristics (§4.8, §10.3), named as
//! fields rather than baked-in literals so they can be tuned per-instance
//! and so each heuristic can be toggled off for regression testing (§10.6
//! "PlayerOptions-style feature toggles").

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchParams {
    pub null_move_pruning: bool,
    pub null_move_min_depth: i32,
    /// `r` in null-move pruning's `depth - r` reduced search: `min(depth/3+2, depth)`.
    pub null_move_reduction_divisor: i32,
    pub null_move_reduction_base: i32,

    pub reverse_futility_pruning: bool,
    pub reverse_futility_max_depth: i32,
    pub reverse_futility_margin_per_ply: i32,

    pub late_move_pruning: bool,

    pub futility_for_captures: bool,
    pub futility_max_depth: i32,
    pub futility_base_margin: i32,
    pub futility_margin_per_ply: i32,

    pub late_move_reduction: bool,
    pub late_move_reduction_min_depth: i32,
    pub late_move_reduction_min_move_count: usize,
    pub late_move_reduction_min_move_count_at_root: usize,

    pub check_extensions: bool,
    pub check_extension_move_count_limit: usize,
    pub check_extension_path_cap: u32,

    pub killers: bool,
    pub history: bool,
    pub move_order_check_bonus: bool,

    pub lazy_eval: bool,
    pub king_safety: bool,
    pub piece_imbalance: bool,

    /// Full-width aspiration window half-width around the previous depth's
    /// score (§4.8 "exponentially widening on fail-high/low").
    pub aspiration_window: i32,
}

impl Default for SearchParams {
    fn default() -> SearchParams {
        SearchParams {
            null_move_pruning: true,
            null_move_min_depth: 3,
            null_move_reduction_divisor: 3,
            null_move_reduction_base: 2,

            reverse_futility_pruning: true,
            reverse_futility_max_depth: 1,
            reverse_futility_margin_per_ply: 150,

            late_move_pruning: true,

            futility_for_captures: true,
            futility_max_depth: 10,
            futility_base_margin: 400,
            futility_margin_per_ply: 291,

            late_move_reduction: true,
            late_move_reduction_min_depth: 1,
            late_move_reduction_min_move_count: 1,
            late_move_reduction_min_move_count_at_root: 2,

            check_extensions: true,
            check_extension_move_count_limit: 6,
            check_extension_path_cap: 3,

            killers: true,
            history: true,
            move_order_check_bonus: true,

            lazy_eval: true,
            king_safety: true,
            piece_imbalance: true,

            aspiration_window: 25,
        }
    }
}

impl SearchParams {
    /// `1 + depth² / 5` quiets explored before late-move pruning skips the
    /// rest (§4.8).
    #[must_use]
    pub fn late_move_pruning_limit(&self, depth: i32) -> i32 {
        1 + depth.max(0).pow(2) / 5
    }

    #[must_use]
    pub fn null_move_reduction(&self, depth: i32) -> i32 {
        (depth / self.null_move_reduction_divisor + self.null_move_reduction_base).min(depth)
    }
}
