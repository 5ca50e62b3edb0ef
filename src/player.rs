pub mod alpha_beta;
pub mod heuristic;
pub mod min_max;
pub mod random;

pub use alpha_beta::AlphaBetaAi;
pub use heuristic::HeuristicAi;
pub use min_max::MinMaxAi;
pub use random::RandomAi;
