mod elimination_game;
mod greedy;
mod heuristics;
mod lb_triang;
mod lookahead;
mod order;

pub use elimination_game::elimination_game;
pub use greedy::greedy_triangulate;
pub use heuristics::*;
pub use lb_triang::lb_triangulate;
pub use lookahead::lookahead_cost;

pub(crate) use elimination_game::elimination_game_search;
pub(crate) use greedy::greedy_search;
pub(crate) use lb_triang::lb_search;
pub(crate) use order::validate_order;
