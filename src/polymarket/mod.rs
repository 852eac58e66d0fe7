pub mod data_client;
pub mod gamma_client;
pub mod trading;
pub mod types;
pub mod wallet;

pub use data_client::DataClient;
pub use gamma_client::{GammaClient, PublicProfile};
pub use trading::TradingClient;
pub use types::{ActivityEntry, ApiPosition, OrderBook};
pub use wallet::PolymarketWallet;
