use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use findpad::cli::{Action, CliArgs, StartupConfig};
use findpad::io::{FsContentProvider, FsPersistenceSink};
use findpad::messages::{DocumentMsg, Msg, SearchMsg, TabMsg};
use findpad::model::{AppModel, TabId};
use findpad::runtime::App;
use findpad::EditorConfig;

type FsApp = App<FsContentProvider, FsPersistenceSink>;

fn main() -> Result<ExitCode> {
    let startup = CliArgs::parse().into_config().map_err(|e| anyhow!(e))?;

    findpad::tracing::init();

    let config = EditorConfig::load();
    let provider = FsContentProvider::new(config.max_file_size_bytes());
    let mut app = App::new(AppModel::new(config), provider, FsPersistenceSink);

    app.dispatch_all(startup.panel_msgs());

    let mut open_failures = 0;
    for path in &startup.paths {
        app.dispatch(Msg::Tab(TabMsg::Open(path.clone())));
        if app.model().tabs.find_open_file(path).is_none() {
            eprintln!("{}", app.model().ui.status_message);
            open_failures += 1;
        }
    }

    let tabs: Vec<TabId> = app.model().tabs.tab_ids().to_vec();
    let mut matched = false;
    for tab in tabs {
        matched |= run_on_tab(&mut app, &startup, tab)
            .with_context(|| format!("processing tab {}", tab.0))?;
    }

    if open_failures > 0 {
        return Ok(ExitCode::from(2));
    }
    if startup.keyword.is_some() && !matched {
        return Ok(ExitCode::from(1));
    }
    Ok(ExitCode::SUCCESS)
}

/// Activate `tab`, run the requested action and print its outcome.
///
/// Returns whether the keyword matched anything in this document.
fn run_on_tab(app: &mut FsApp, startup: &StartupConfig, tab: TabId) -> Result<bool> {
    app.dispatch(Msg::Tab(TabMsg::Activate(tab)));
    let name = app
        .model()
        .active_document()
        .map(|doc| doc.display_name())
        .ok_or_else(|| anyhow!("tab {} disappeared", tab.0))?;

    let revision_before = app.model().active_document().map(|d| d.revision);
    if let Some(msg) = startup.action_msg() {
        app.dispatch(msg);
    }
    let model = app.model();
    let matched = match startup.action {
        Action::Open => false,
        Action::Find => model.active_document().is_some_and(|d| d.selection.is_some()),
        Action::ReplaceOne { .. } | Action::ReplaceAll { .. } => {
            model.active_document().map(|d| d.revision) != revision_before
        }
    };

    if startup.action == Action::Open {
        println!("{}", model.status_line());
    } else {
        println!("{}: {}", name, model.ui.status_message);
    }

    if startup.list {
        app.dispatch(Msg::Search(SearchMsg::FindAll));
        let model = app.model();
        if model.tabs.search.results.is_empty() {
            println!("{}: {}", name, model.ui.status_message);
        }
        for hit in &model.tabs.search.results {
            println!("{}: {}", name, hit);
        }
    }

    if startup.write && matched {
        app.dispatch(Msg::Document(DocumentMsg::Save));
        let model = app.model();
        if model.active_document().is_some_and(|d| d.is_modified) {
            return Err(anyhow!("{}", model.ui.status_message))
                .with_context(|| format!("saving {}", name));
        }
        println!("{}: {}", name, model.ui.status_message);
    }

    Ok(matched)
}
