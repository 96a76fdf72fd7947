use anyhow::{Context, Result};
use clap::ArgMatches;

use openshelf::{
    config::Styleable,
    search::{
        pagination::{EditionPager, PageWindow},
        query::TermField,
    },
    traits::{CatalogSource, DisplayTerminal},
    types::{
        edition::Edition,
        work::{WorkDetails, NO_AUTHORS, NO_SUBJECTS},
    },
};

use crate::App;

/// The search-entry view: term flags when given, prompts otherwise. The
/// terms go into the shared context before the search runs, so a later
/// `results`/`page` sees the same terms the search used.
pub async fn search_view(app: &App, matches: &ArgMatches) -> Result<()> {
    let flags_given = matches.contains_id("title")
        || matches.contains_id("author")
        || matches.contains_id("subject");
    let (title, author, subject) = if flags_given {
        (
            matches
                .get_one::<String>("title")
                .cloned()
                .unwrap_or_default(),
            matches
                .get_one::<String>("author")
                .cloned()
                .unwrap_or_default(),
            matches
                .get_one::<String>("subject")
                .cloned()
                .unwrap_or_default(),
        )
    } else {
        (
            inquire::Text::new("Search by title:")
                .prompt_skippable()?
                .unwrap_or_default(),
            inquire::Text::new("Search by author:")
                .prompt_skippable()?
                .unwrap_or_default(),
            inquire::Text::new("Search by subject:")
                .prompt_skippable()?
                .unwrap_or_default(),
        )
    };
    app.coordinator.update_term(TermField::Title, title);
    app.coordinator.update_term(TermField::Author, author);
    app.coordinator.update_term(TermField::Subject, subject);
    if !app.coordinator.search().await? {
        println!("All search terms are blank, nothing to search for.");
        return Ok(());
    }
    results_view(app).await
}

/// The results view: the current page of books as cards.
pub async fn results_view(app: &App) -> Result<()> {
    let state = app.coordinator.context().snapshot();
    let window = PageWindow::of(state.current_page, state.total_results);
    println!(
        "Showing {} to {} of {} results",
        window.start, window.end, window.total
    );
    for book in &state.results {
        println!("{}", book.fmt_to_string(&app.client, &app.config).await?);
    }
    Ok(())
}

pub async fn page_view(app: &App, matches: &ArgMatches) -> Result<()> {
    let Some(number) = matches.get_one::<String>("number") else {
        unreachable!("page number is required");
    };
    let page = number.parse::<usize>().context("page must be a number")?;
    go_to_page_view(app, page).await
}

pub async fn next_page_view(app: &App) -> Result<()> {
    let current = app.coordinator.context().snapshot().current_page;
    go_to_page_view(app, current + 1).await
}

pub async fn prev_page_view(app: &App) -> Result<()> {
    let current = app.coordinator.context().snapshot().current_page;
    if current <= 1 {
        println!("No such page.");
        return Ok(());
    }
    go_to_page_view(app, current - 1).await
}

async fn go_to_page_view(app: &App, page: usize) -> Result<()> {
    if app.coordinator.go_to_page(page).await? {
        results_view(app).await
    } else {
        println!("No such page.");
        Ok(())
    }
}

/// The detail view: title, authors, description, subjects, and the first
/// page of editions.
pub async fn detail_view(app: &App, matches: &ArgMatches) -> Result<()> {
    let Some(id) = matches.get_one::<String>("id") else {
        unreachable!("id is required");
    };
    let full = matches.get_flag("full");

    let work = WorkDetails::from(app.client.work(id).await?);
    let authors = app.client.resolve_author_names(&work).await;
    let by = if authors.is_empty() {
        NO_AUTHORS.to_string()
    } else {
        authors.join(", ")
    };

    println!("{}", work.title.style(&app.config.output_book.style_content));
    println!("{}", app.config.output_author.format_str(by));
    println!();
    if full {
        println!("{}", work.description_full());
    } else {
        println!("{}", work.description_preview());
        if work.has_longer_description() {
            println!("More: show {id} --full");
        }
    }
    println!();
    println!("Subjects");
    if work.subjects.is_empty() {
        println!("{}", app.config.output_subject.format_vec(vec![NO_SUBJECTS]));
    } else {
        println!(
            "{}",
            app.config
                .output_subject
                .format_vec(work.subjects.iter().take(3).collect())
        );
    }
    println!();
    println!("Editions");
    render_editions(app, id, 1).await
}

pub async fn editions_view(app: &App, matches: &ArgMatches) -> Result<()> {
    let Some(id) = matches.get_one::<String>("id") else {
        unreachable!("id is required");
    };
    let page = match matches.get_one::<String>("page") {
        Some(number) => number.parse::<usize>().context("page must be a number")?,
        None => 1,
    };
    render_editions(app, id, page).await
}

async fn render_editions(app: &App, id: &str, page: usize) -> Result<()> {
    let entries = app.client.editions(id).await?.entries;
    let editions: Vec<Edition> = entries.into_iter().map(Edition::from).collect();
    let mut pager = EditionPager::new(editions);
    pager.change_page(page);
    let window = pager.window();
    println!(
        "Showing {} to {} of {} editions",
        window.start, window.end, window.total
    );

    // Every card resolves its own language; run the lookups as one
    // unordered fan-out, then print the cards in page order.
    let mut handles = Vec::new();
    for edition in pager.visible().iter().cloned() {
        let client = app.client.clone();
        let config = app.config.clone();
        handles.push(tokio::spawn(async move {
            edition.fmt_to_string(&client, &config).await
        }));
    }
    for handle in handles {
        println!("{}", handle.await??);
    }
    Ok(())
}
