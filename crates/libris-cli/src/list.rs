//! Applying `list` command-line options to a screen.

use anyhow::{Context, Result, bail};

use libris_model::RawCollection;
use libris_view::{ListView, ScreenConfig, SortDirection, SortKey, split_filter_arg};

/// Search, filter, sort and paging options for one `list` invocation.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub search: Option<String>,
    /// `FIELD=VALUE` arguments, applied in order.
    pub filters: Vec<String>,
    pub sort: Option<String>,
    pub desc: bool,
    pub page: usize,
    pub page_size: Option<usize>,
}

/// Mount `screen` over `raw` and apply the options.
///
/// `--desc` without `--sort` flips the screen's default sort; a screen
/// without one rejects it.
pub fn build_view(
    mut screen: ScreenConfig,
    raw: RawCollection,
    options: &ListOptions,
) -> Result<ListView> {
    if let Some(size) = options.page_size {
        screen.set_page_size(size).context("--page-size")?;
    }
    let mut view = ListView::new(screen).with_collection(raw);

    if let Some(query) = &options.search {
        view.set_search(query.as_str());
    }
    for filter in &options.filters {
        let (field, value) = split_filter_arg(filter)?;
        view.set_filter(field, value)?;
    }

    let direction = if options.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let sort = match &options.sort {
        Some(field) => Some(SortKey {
            field: field.clone(),
            direction,
        }),
        None if options.desc => match view.criteria().sort() {
            Some(key) => Some(SortKey {
                field: key.field.clone(),
                direction,
            }),
            None => bail!(
                "--desc needs --sort on the {} screen, which has no default sort",
                view.config().name()
            ),
        },
        None => view.criteria().sort().cloned(),
    };
    view.set_sort(sort)?;
    view.set_page(options.page);
    Ok(view)
}
