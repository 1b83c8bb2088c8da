use anyhow::Context;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_cost::ast;
use libgraphql_cost::file_reader;
use libgraphql_cost::inline_fragments;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct InlineCmd {
    #[arg(
        help="Path to the GraphQL document whose fragment spreads should be \
             inlined.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,
}
impl InlineCmd {
    fn inline(&self) -> anyhow::Result<ast::operation::Document> {
        let query_src = file_reader::read_content(&self.query_file)?;
        let document = ast::operation::parse(&query_src)
            .with_context(|| format!("Failed to parse {:?}", self.query_file))?;
        log::debug!(
            "Parsed {} definitions from {:?}.",
            document.definitions.len(),
            self.query_file,
        );
        Ok(inline_fragments(&document)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for InlineCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match self.inline() {
            Ok(document) => CommandResult::stdout(format_args!("{document}")),
            Err(err) => CommandResult::from_error("Inlining failed", &err),
        }
    }
}
