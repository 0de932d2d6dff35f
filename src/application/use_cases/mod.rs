pub mod analyze_trade_signal;
pub mod refresh_market_data;

pub use analyze_trade_signal::AnalyzeTradeSignalUseCase;
pub use refresh_market_data::RefreshMarketDataUseCase;
