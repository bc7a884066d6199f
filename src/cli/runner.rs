//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, QueryArgs};
use crate::client::ApiClient;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::query::Query;
use crate::resource::FieldSelector;
use crate::types::{SortBy, SortOrder};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check => self.check().await,
            Commands::Count { query } => self.count(query).await,
            Commands::Fetch {
                query,
                max_items,
                sort_by,
                ascending,
                include,
            } => {
                self.fetch(query, *max_items, sort_by, *ascending, include)
                    .await
            }
        }
    }

    /// Build the client from the config file and/or flag overrides
    fn client(&self) -> Result<ApiClient> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_yaml_file(path)?,
            None => ClientConfig::new(
                self.cli.host.clone().unwrap_or_default(),
                self.cli.api_key.clone().unwrap_or_default(),
            ),
        };

        if let Some(host) = &self.cli.host {
            config.host.clone_from(host);
        }
        if let Some(key) = &self.cli.api_key {
            config.api_key.clone_from(key);
        }

        ApiClient::from_config(&config)
    }

    async fn check(&self) -> Result<()> {
        let client = self.client()?;
        let visible = client.count(&Query::articles()).await?;
        println!("ok: credentials accepted, {visible} articles visible");
        Ok(())
    }

    async fn count(&self, args: &QueryArgs) -> Result<()> {
        let client = self.client()?;
        let count = client.count(&build_query(args)).await?;
        println!("{count}");
        Ok(())
    }

    async fn fetch(
        &self,
        args: &QueryArgs,
        max_items: Option<usize>,
        sort_by: &str,
        ascending: bool,
        include: &[String],
    ) -> Result<()> {
        let client = self.client()?;

        let mut fields = FieldSelector::new();
        for field in include {
            fields = fields.include(field);
        }

        let order = if ascending {
            SortOrder::Ascending
        } else {
            SortOrder::Descending
        };

        let mut iter = client
            .iter(build_query(args))
            .sort_by(parse_sort_by(sort_by))
            .sort_order(order)
            .fields(fields);
        if let Some(max) = max_items {
            iter = iter.max_items(max);
        }

        while let Some(item) = iter.next().await {
            println!("{}", serde_json::to_string(&item)?);
        }

        // a fail-soft scan still reports its truncation on exit
        if let Some(error) = iter.last_error() {
            return Err(Error::Other(format!(
                "fetch ended early after {} items: {error}",
                iter.items_yielded()
            )));
        }

        Ok(())
    }
}

/// Translate query flags into a query document
fn build_query(args: &QueryArgs) -> Query {
    let mut query = Query::new(args.resource);
    for keyword in &args.keyword {
        query = query.keyword(keyword);
    }
    for concept in &args.concept {
        query = query.concept(concept);
    }
    for source in &args.source {
        query = query.source(source);
    }
    for category in &args.category {
        query = query.category(category);
    }
    for lang in &args.lang {
        query = query.lang(lang);
    }
    if let Some(date) = args.date_start {
        query = query.date_start(date);
    }
    if let Some(date) = args.date_end {
        query = query.date_end(date);
    }
    query
}

/// Map a sort flag to its wire key, falling back to a custom key
fn parse_sort_by(flag: &str) -> SortBy {
    match flag {
        "date" => SortBy::Date,
        "rel" => SortBy::Rel,
        "socialScore" => SortBy::SocialScore,
        "sourceImportance" => SortBy::SourceImportance,
        other => SortBy::Custom(other.to_string()),
    }
}
