pub mod balance_accumulator;
pub mod settlement_calculator;

pub use balance_accumulator::BalanceAccumulator;
pub use settlement_calculator::SettlementCalculator;
