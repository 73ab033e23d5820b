pub mod competition;
pub mod rank;
pub mod roulette;
pub mod selection_strategy;
mod wheel;

pub use competition::CompetitionSelection;
pub use rank::RankBasedSelection;
pub use roulette::RouletteWheelSelection;
pub use selection_strategy::SelectionStrategy;
