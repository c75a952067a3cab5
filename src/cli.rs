//! Command-line argument parsing
//!
//! Supports:
//! - Opening several files as tabs
//! - Finding, listing and replacing a keyword in each of them
//! - Writing replaced documents back to disk

use clap::Parser;
use std::path::PathBuf;

use crate::messages::{Msg, SearchMsg};
use crate::search::MatchMode;

/// Find and replace literal text across files
#[derive(Parser, Debug, Default)]
#[command(
    name = "findpad",
    version,
    about = "Find and replace literal text across files"
)]
pub struct CliArgs {
    /// Files to open, one tab each
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Keyword to search for
    #[arg(long, value_name = "KW")]
    pub find: Option<String>,

    /// Replacement text (replaces the first match unless --all is given)
    #[arg(long, value_name = "TEXT")]
    pub replace: Option<String>,

    /// Replace every match
    #[arg(long)]
    pub all: bool,

    /// Match case exactly
    #[arg(short = 'c', long)]
    pub case_sensitive: bool,

    /// Match whole words only
    #[arg(short = 'e', long)]
    pub exact: bool,

    /// Do not wrap around when searching
    #[arg(long)]
    pub no_wrap: bool,

    /// Save documents after replacing
    #[arg(long)]
    pub write: bool,

    /// Print every line containing the keyword
    #[arg(long)]
    pub list: bool,
}

/// What to do with each opened document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open and report the status line only
    Open,
    /// Locate the first match
    Find,
    /// Replace the first match
    ReplaceOne { replacement: String },
    /// Replace every match
    ReplaceAll { replacement: String },
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Files to open, in tab order
    pub paths: Vec<PathBuf>,
    /// Search keyword, if any
    pub keyword: Option<String>,
    pub action: Action,
    /// Print line results after the action
    pub list: bool,
    /// Save after replacing
    pub write: bool,
    /// Flag overrides; `None` keeps the configured default
    pub case_sensitive: Option<bool>,
    pub match_mode: Option<MatchMode>,
    pub wrap_search: Option<bool>,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        if self.find.is_none() {
            if self.replace.is_some() {
                return Err("--replace requires --find".to_string());
            }
            if self.all {
                return Err("--all requires --find".to_string());
            }
            if self.list {
                return Err("--list requires --find".to_string());
            }
        }
        if self.all && self.replace.is_none() {
            return Err("--all requires --replace".to_string());
        }
        if self.write && self.replace.is_none() {
            return Err("--write requires --replace".to_string());
        }

        let action = match (&self.find, self.replace, self.all) {
            (None, _, _) => Action::Open,
            (Some(_), None, _) => Action::Find,
            (Some(_), Some(replacement), false) => Action::ReplaceOne { replacement },
            (Some(_), Some(replacement), true) => Action::ReplaceAll { replacement },
        };

        Ok(StartupConfig {
            paths: self.paths,
            keyword: self.find,
            action,
            list: self.list,
            write: self.write,
            case_sensitive: self.case_sensitive.then_some(true),
            match_mode: self.exact.then_some(MatchMode::Exact),
            wrap_search: self.no_wrap.then_some(false),
        })
    }
}

impl StartupConfig {
    /// Messages that load the search panel with the requested keyword and flags
    pub fn panel_msgs(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(enabled) = self.case_sensitive {
            msgs.push(Msg::Search(SearchMsg::SetCaseSensitive(enabled)));
        }
        if let Some(mode) = self.match_mode {
            msgs.push(Msg::Search(SearchMsg::SetMatchMode(mode)));
        }
        if let Some(enabled) = self.wrap_search {
            msgs.push(Msg::Search(SearchMsg::SetWrapSearch(enabled)));
        }
        if let Some(keyword) = &self.keyword {
            msgs.push(Msg::Search(SearchMsg::SetQuery(keyword.clone())));
        }
        if let Action::ReplaceOne { replacement } | Action::ReplaceAll { replacement } =
            &self.action
        {
            msgs.push(Msg::Search(SearchMsg::SetReplacement(replacement.clone())));
        }
        msgs
    }

    /// The message that performs the action on the active document
    pub fn action_msg(&self) -> Option<Msg> {
        match self.action {
            Action::Open => None,
            Action::Find => Some(Msg::Search(SearchMsg::FindNext)),
            Action::ReplaceOne { .. } => Some(Msg::Search(SearchMsg::ReplaceOne)),
            Action::ReplaceAll { .. } => Some(Msg::Search(SearchMsg::ReplaceAll)),
        }
    }
}
