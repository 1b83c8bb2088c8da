mod estimate;
mod inline;

use crate::Cli;
use crate::CommandResult;
use estimate::EstimateCmd;
use inline::InlineCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-cost")]
pub(crate) enum CommandEnum {
    /// Compute the cost and maxNode scores of a query document.
    Estimate(Box<EstimateCmd>),

    /// Print a query document with all of its fragment spreads inlined.
    Inline(Box<InlineCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Estimate(cmd) => cmd.run(cli).await,
            Self::Inline(cmd) => cmd.run(cli).await,
        }
    }
}
