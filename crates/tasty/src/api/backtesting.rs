//! Strategy backtests.

use tracing::{debug, instrument};

use crate::client::Client;
use crate::envelope::{Envelope, Items};
use crate::error::Error;
use crate::models::{Backtest, BacktestRequest};

const BACKTESTING: &str = "backtesting";

impl Client {
    /// Queue a backtest. The returned record carries the id to poll with
    /// [`Client::backtest`].
    #[instrument(skip(self, request), fields(symbol = %request.symbol, legs = request.legs.len()))]
    pub async fn submit_backtest(&self, request: &BacktestRequest) -> Result<Envelope<Backtest>, Error> {
        let submitted: Envelope<Backtest> = self.post(self.endpoint([BACKTESTING]), request).await?;
        debug!(id = %submitted.data.id, "backtest submitted");
        Ok(submitted)
    }

    #[instrument(skip(self))]
    pub async fn backtest(&self, id: &str) -> Result<Envelope<Backtest>, Error> {
        self.get(self.endpoint([BACKTESTING, id])).await
    }

    #[instrument(skip(self))]
    pub async fn backtests(&self) -> Result<Envelope<Items<Backtest>>, Error> {
        self.get(self.endpoint([BACKTESTING])).await
    }
}
