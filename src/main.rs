// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Blameview CLI entrypoint.
//!
//! Opens a served report, replays a sequence of viewer actions against it and prints the
//! resulting page state as JSON. The report server is told the session ended on exit.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use blameview::client::{shutdown_url, HttpShutdownTransport, HttpTableSource};
use blameview::config::{load_config, ViewerConfig};
use blameview::model::{FilterKind, SessionId, TabId, TableId};
use blameview::view::{ReloadDecision, ReloadGuard, ReportSession, ReportViewer};
use url::Url;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} <report-url> [--session <id>] [--config <path>] [actions...]\n\nActions run in order after the first tab has been opened:\n  --tab <tab-id>                 show a tab\n  --select <table-id>            select a table variant\n  --toggle <table-id>:<filter>   click a filter control (exclusions, empty-lines, colors)\n  --scroll <px>                  scroll the page\n\nThe session id defaults to the `v` parameter of <report-url>.\n--config defaults to <config dir>/blameview/config.toml when that file exists."
    );
}

#[derive(Debug, Clone, PartialEq)]
enum Action {
    Tab(TabId),
    Select(TableId),
    Toggle(TableId, FilterKind),
    Scroll(f64),
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    url: Option<String>,
    session: Option<String>,
    config: Option<PathBuf>,
    actions: Vec<Action>,
}

fn parse_toggle(raw: &str) -> Result<Action, ()> {
    let (table, kind) = raw.rsplit_once(':').ok_or(())?;
    let table_id = TableId::new(table).map_err(|_| ())?;
    let kind: FilterKind = kind.parse().map_err(|_| ())?;
    Ok(Action::Toggle(table_id, kind))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--session" => {
                if options.session.is_some() {
                    return Err(());
                }
                options.session = Some(args.next().ok_or(())?);
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(PathBuf::from(args.next().ok_or(())?));
            }
            "--tab" => {
                let raw = args.next().ok_or(())?;
                options.actions.push(Action::Tab(TabId::new(raw).map_err(|_| ())?));
            }
            "--select" => {
                let raw = args.next().ok_or(())?;
                options.actions.push(Action::Select(TableId::new(raw).map_err(|_| ())?));
            }
            "--toggle" => {
                let raw = args.next().ok_or(())?;
                options.actions.push(parse_toggle(&raw)?);
            }
            "--scroll" => {
                let raw = args.next().ok_or(())?;
                let px: f64 = raw.parse().map_err(|_| ())?;
                if !px.is_finite() {
                    return Err(());
                }
                options.actions.push(Action::Scroll(px));
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.url.is_some() {
                    return Err(());
                }
                options.url = Some(arg);
            }
        }
    }

    if options.url.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "blameview".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let (config, config_err) = match load_config(options.config.as_deref()) {
            Ok(config) => (config, None),
            Err(err) if options.config.is_none() => (ViewerConfig::default(), Some(err)),
            Err(err) => return Err(err.into()),
        };
        blameview::logging::init_logging(&config.logging.filter);
        if let Some(err) = config_err {
            tracing::warn!(error = %err, "ignoring unreadable config, using defaults");
        }

        let raw_url = options.url.unwrap_or_default();
        let url = Url::parse(&raw_url)?;
        let session_raw = options
            .session
            .or_else(|| ReloadGuard::marker(&url))
            .ok_or("no session id: pass --session or a report URL carrying `?v=<id>`")?;
        let session_id = SessionId::new(session_raw)?;
        let page_url = match ReloadGuard::check(&url) {
            ReloadDecision::Proceed => url,
            ReloadDecision::Reload(fresh) => fresh,
        };

        let actions = options.actions;
        let timeout = Duration::from_millis(config.server.request_timeout_ms);
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        let snapshot = runtime.block_on(async {
            let source = HttpTableSource::new(page_url.clone(), timeout);
            let outline = source.fetch_report_page().await?;
            let session = ReportSession::new(session_id.clone(), outline, &config.session_options());
            let viewer = ReportViewer::new(
                session,
                source,
                HttpShutdownTransport::new(timeout),
                shutdown_url(&page_url, &session_id),
            );

            viewer.open().await?;
            for action in actions {
                match action {
                    Action::Tab(tab_id) => {
                        viewer.activate_tab(&tab_id).await?;
                    }
                    Action::Select(table_id) => {
                        viewer.select_table(&table_id).await?;
                    }
                    Action::Toggle(table_id, kind) => {
                        if viewer.click_filter(&table_id, kind).is_none() {
                            tracing::warn!(table = %table_id, filter = %kind, "no such control");
                        }
                    }
                    Action::Scroll(px) => {
                        viewer.scroll_to(px);
                    }
                }
            }

            let snapshot = viewer.snapshot();
            viewer.close();
            Ok::<_, Box<dyn Error>>(snapshot)
        })?;

        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("blameview: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use blameview::model::{FilterKind, TabId, TableId};

    use super::{parse_options, Action};

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|value| (*value).to_owned()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn parses_url_only() {
        let options = parse_options(args(&["http://localhost:8080/?v=abc"])).expect("parse options");
        assert_eq!(options.url.as_deref(), Some("http://localhost:8080/?v=abc"));
        assert!(options.session.is_none());
        assert!(options.config.is_none());
        assert!(options.actions.is_empty());
    }

    #[test]
    fn keeps_actions_in_order() {
        let options = parse_options(args(&[
            "http://localhost:8080/",
            "--toggle",
            "f1.py:empty-lines",
            "--tab",
            "author-view",
            "--scroll",
            "120.5",
            "--select",
            "f2.py",
        ]))
        .expect("parse options");
        assert_eq!(
            options.actions,
            vec![
                Action::Toggle(TableId::new("f1.py").expect("id"), FilterKind::HideEmptyLines),
                Action::Tab(TabId::new("author-view").expect("id")),
                Action::Scroll(120.5),
                Action::Select(TableId::new("f2.py").expect("id")),
            ]
        );
    }

    #[test]
    fn parses_session_and_config() {
        let options = parse_options(args(&[
            "--session",
            "SESSION",
            "http://localhost:8080/",
            "--config",
            "viewer.toml",
        ]))
        .expect("parse options");
        assert_eq!(options.session.as_deref(), Some("SESSION"));
        assert_eq!(options.config.as_deref(), Some(std::path::Path::new("viewer.toml")));
    }

    #[test]
    fn rejects_missing_url() {
        parse_options(args(&["--session", "SESSION"])).unwrap_err();
    }

    #[test]
    fn rejects_unknown_args_and_duplicates() {
        parse_options(args(&["http://x/", "--nope"])).unwrap_err();
        parse_options(args(&["http://x/", "http://y/"])).unwrap_err();
        parse_options(args(&["http://x/", "--session", "a", "--session", "b"])).unwrap_err();
    }

    #[test]
    fn rejects_bad_action_values() {
        parse_options(args(&["http://x/", "--toggle", "f1.py"])).unwrap_err();
        parse_options(args(&["http://x/", "--toggle", "f1.py:sparkles"])).unwrap_err();
        parse_options(args(&["http://x/", "--scroll", "lots"])).unwrap_err();
        parse_options(args(&["http://x/", "--scroll", "NaN"])).unwrap_err();
        parse_options(args(&["http://x/", "--select", ""])).unwrap_err();
        parse_options(args(&["http://x/", "--tab"])).unwrap_err();
    }
}
