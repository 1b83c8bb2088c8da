use anyhow::Context;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use libgraphql_cost::DEFAULT_MAX_DEPTH;
use libgraphql_cost::DEFAULT_MAX_EXPANDED_SELECTIONS;
use libgraphql_cost::QueryMetrics;
use libgraphql_cost::QueryMetricsEstimator;
use libgraphql_cost::TypeCostTable;
use libgraphql_cost::VariableBindings;
use libgraphql_cost::file_reader;
use libgraphql_cost::schema::Schema;
use libgraphql_cost::schema::SchemaBuilder;
use std::collections::HashSet;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct EstimateCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Emit the metrics as a JSON object rather than as text.",
        long,
    )]
    json: bool,

    #[arg(
        default_value_t=DEFAULT_MAX_DEPTH,
        help="Maximum nesting depth of selection sets before estimation is \
             aborted.",
        long,
    )]
    max_depth: usize,

    #[arg(
        default_value_t=DEFAULT_MAX_EXPANDED_SELECTIONS,
        help="Maximum number of selections fragment inlining may produce \
             before estimation is aborted.",
        long,
    )]
    max_expanded_selections: usize,

    #[arg(
        help="Only score the operation with this name. By default every \
             operation in the document is scored and the scores are summed.",
        long,
    )]
    operation_name: Option<String>,

    #[arg(
        help="Path to the GraphQL document containing the operation(s) to \
             estimate.",
        name="QUERY_FILE",
    )]
    query_file: PathBuf,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing GraphQL schema files.",
        long,
        required=true,
        short='s',
    )]
    schema: Vec<PathBuf>,

    #[arg(
        help="Path to a JSON object mapping type names to non-negative \
             integer weights.",
        long,
    )]
    type_costs_file: Option<PathBuf>,

    #[arg(
        help="Path to a JSON object of variable values for the operation(s).",
        long,
    )]
    variables_file: Option<PathBuf>,
}
impl EstimateCmd {
    fn find_schema_files(&self) -> anyhow::Result<Vec<PathBuf>> {
        // Normalize the set of file extensions to filter with
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        log::debug!("Scanning {} schema paths...", self.schema.len());
        let mut file_paths = vec![];
        for path in &self.schema {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = entry.with_context(|| format!(
                    "Failed to scan for schema files under {path:?}",
                ))?;
                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                // A file named directly on the command line is loaded even if
                // its extension doesn't match.
                let named_directly = entry.depth() == 0;
                let has_graphql_ext =
                    entry_path.extension()
                        .map(|ext| ext.to_string_lossy())
                        .is_some_and(|ext| graphql_file_exts.contains(&*ext));
                if named_directly || has_graphql_ext {
                    log::trace!("Found schema file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                }
            }
        }

        if file_paths.is_empty() {
            anyhow::bail!(
                "No schema files found (searched for extensions: {}).",
                self.graphql_file_exts.join(", "),
            );
        }
        log::debug!("Found {} schema files.", file_paths.len());
        Ok(file_paths)
    }

    fn load_schema(&self) -> anyhow::Result<Schema> {
        let file_paths = self.find_schema_files()?;
        let schema = SchemaBuilder::from_files(&file_paths)?.build()?;
        Ok(schema)
    }

    fn load_type_costs(&self) -> anyhow::Result<TypeCostTable> {
        let Some(path) = &self.type_costs_file else {
            return Ok(TypeCostTable::new());
        };
        let content = file_reader::read_content(path)?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid type-cost table in {path:?}"))
    }

    fn load_variables(&self) -> anyhow::Result<VariableBindings> {
        let Some(path) = &self.variables_file else {
            return Ok(VariableBindings::new());
        };
        let content = file_reader::read_content(path)?;
        let json: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Invalid variables JSON in {path:?}"))?;
        if !json.is_object() {
            anyhow::bail!("Variables in {path:?} must be a JSON object.");
        }
        Ok(VariableBindings::from_json(&json))
    }

    fn estimate(&self) -> anyhow::Result<QueryMetrics> {
        let schema = self.load_schema().context("Failed to load schema")?;
        let variables = self.load_variables()?;
        let type_costs = self.load_type_costs()?;
        let query_src = file_reader::read_content(&self.query_file)?;

        let mut estimator = QueryMetricsEstimator::new(&schema)
            .with_max_depth(self.max_depth)
            .with_max_expanded_selections(self.max_expanded_selections)
            .with_type_costs(&type_costs)
            .with_variables(&variables);
        if let Some(operation_name) = self.operation_name.as_deref() {
            estimator = estimator.with_operation_name(operation_name);
        }

        let metrics = estimator.estimate_str(&query_src)
            .with_context(|| format!("Failed to estimate {:?}", self.query_file))?;
        Ok(metrics)
    }
}

#[inherent::inherent]
impl RunnableCommand for EstimateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let metrics = match self.estimate() {
            Ok(metrics) => metrics,
            Err(err) => return CommandResult::from_error("Estimation failed", &err),
        };

        if self.json {
            return match serde_json::to_string_pretty(&metrics) {
                Ok(json) => CommandResult::stdout(format_args!("{json}")),
                Err(err) => CommandResult::from_error(
                    "Failed to serialize metrics",
                    &err.into(),
                ),
            };
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Estimated {:?}:\n",
                "  * cost:    {}\n",
                "  * maxNode: {}",
            ),
            output_utils::GREEN_CHECK,
            self.query_file,
            metrics.cost,
            metrics.max_node,
        ))
    }
}
