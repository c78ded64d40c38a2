// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Parsing of the initial report page into a tab outline.

use std::cell::RefCell;
use std::collections::HashMap;

use lol_html::{element, rewrite_str, text, RewriteStrSettings};

use super::fragment::{FragmentError, TableBuilder};
use crate::model::{BlameTable, TabId, TableId, TableVariant};

/// What the initial page tells us about its tabs, before any table is loaded lazily.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportOutline {
    pub has_nav_bar: bool,
    pub tabs: Vec<TabOutline>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TabOutline {
    pub tab_id: TabId,
    pub label: String,
    pub has_toolbar: bool,
    pub variants: Vec<TableVariant>,
    /// Tables embedded in the page itself; they count as already cached.
    pub tables: Vec<BlameTable>,
}

#[derive(Debug, Default)]
struct PaneBuilder {
    pane_id: String,
    has_toolbar: bool,
    radios: Vec<String>,
    tables: Vec<TableBuilder>,
}

#[derive(Debug, Default)]
struct PageBuilder {
    has_nav_bar: bool,
    // (target pane id, label text)
    nav_buttons: Vec<(String, String)>,
    radio_labels: HashMap<String, String>,
    open_label: Option<String>,
    panes: Vec<PaneBuilder>,
}

impl PageBuilder {
    fn current_table(&mut self) -> Option<&mut TableBuilder> {
        self.panes.last_mut().and_then(|pane| pane.tables.last_mut())
    }

    fn finish(self) -> ReportOutline {
        let PageBuilder {
            has_nav_bar,
            nav_buttons,
            radio_labels,
            panes,
            ..
        } = self;

        let tabs = panes
            .into_iter()
            .filter_map(|pane| {
                let tab_id = match TabId::new(pane.pane_id.as_str()) {
                    Ok(tab_id) => tab_id,
                    Err(err) => {
                        tracing::warn!(pane_id = %pane.pane_id, error = %err, "skipping tab pane");
                        return None;
                    }
                };
                let label = nav_buttons
                    .iter()
                    .find(|(target, _)| *target == pane.pane_id)
                    .map(|(_, label)| label.trim().to_owned())
                    .filter(|label| !label.is_empty())
                    .unwrap_or_else(|| pane.pane_id.clone());
                let variants = pane
                    .radios
                    .iter()
                    .filter_map(|radio_id| {
                        let table_id = TableId::from_radio_id(radio_id)?;
                        let label = radio_labels
                            .get(radio_id)
                            .map(|label| label.trim().to_owned())
                            .unwrap_or_else(|| table_id.to_string());
                        Some(TableVariant::new(table_id, label))
                    })
                    .collect();
                let tables = pane
                    .tables
                    .into_iter()
                    .enumerate()
                    .filter_map(|(idx, table)| {
                        let table_id = match table.id() {
                            Some(id) => TableId::new(id).ok()?,
                            None => TableId::new(format!("{}-table-{idx}", pane.pane_id)).ok()?,
                        };
                        Some(table.finish(table_id))
                    })
                    .collect();
                Some(TabOutline {
                    tab_id,
                    label,
                    has_toolbar: pane.has_toolbar,
                    variants,
                    tables,
                })
            })
            .collect();

        ReportOutline { has_nav_bar, tabs }
    }
}

/// Parses the served report page.
///
/// Tab panes are `div.tab-pane` siblings, so every element after a pane opens and before the
/// next one opens belongs to that pane.
pub fn parse_report_page(html: &str) -> Result<ReportOutline, FragmentError> {
    let page = RefCell::new(PageBuilder::default());

    rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers: vec![
                element!("#tab-buttons", |_el| {
                    page.borrow_mut().has_nav_bar = true;
                    Ok(())
                }),
                element!("#tab-buttons button.nav-link", |el| {
                    let target = el.get_attribute("data-bs-target").unwrap_or_default();
                    let target = target.trim_start_matches('#').to_owned();
                    page.borrow_mut().nav_buttons.push((target, String::new()));
                    Ok(())
                }),
                text!("#tab-buttons button.nav-link", |chunk| {
                    if let Some((_, label)) = page.borrow_mut().nav_buttons.last_mut() {
                        label.push_str(chunk.as_str());
                    }
                    Ok(())
                }),
                element!("div.tab-pane", |el| {
                    let pane_id = el.get_attribute("id").unwrap_or_default();
                    page.borrow_mut().panes.push(PaneBuilder {
                        pane_id,
                        ..PaneBuilder::default()
                    });
                    Ok(())
                }),
                element!("div.radio-container", |_el| {
                    if let Some(pane) = page.borrow_mut().panes.last_mut() {
                        pane.has_toolbar = true;
                    }
                    Ok(())
                }),
                element!("input.radio-button", |el| {
                    if let (Some(radio_id), Some(pane)) =
                        (el.get_attribute("id"), page.borrow_mut().panes.last_mut())
                    {
                        pane.radios.push(radio_id);
                    }
                    Ok(())
                }),
                element!("label[for]", |el| {
                    let target = el.get_attribute("for");
                    let mut page = page.borrow_mut();
                    if let Some(target) = &target {
                        page.radio_labels.insert(target.clone(), String::new());
                    }
                    page.open_label = target;
                    Ok(())
                }),
                text!("label[for]", |chunk| {
                    let mut page = page.borrow_mut();
                    if let Some(target) = page.open_label.clone() {
                        if let Some(label) = page.radio_labels.get_mut(&target) {
                            label.push_str(chunk.as_str());
                        }
                    }
                    Ok(())
                }),
                element!("table", |el| {
                    if let Some(pane) = page.borrow_mut().panes.last_mut() {
                        pane.tables.push(TableBuilder::with_id(el.get_attribute("id")));
                    }
                    Ok(())
                }),
                element!("thead", |_el| {
                    if let Some(table) = page.borrow_mut().current_table() {
                        table.start_header();
                    }
                    Ok(())
                }),
                element!("thead th", |el| {
                    if let Some(table) = page.borrow_mut().current_table() {
                        table.push_header_cell(el.get_attribute("class"));
                    }
                    Ok(())
                }),
                element!("thead button", |el| {
                    let class_list = el.get_attribute("class").unwrap_or_default();
                    if let Some(table) = page.borrow_mut().current_table() {
                        table.push_control(&class_list);
                    }
                    Ok(())
                }),
                element!("tbody tr", |_el| {
                    if let Some(table) = page.borrow_mut().current_table() {
                        table.start_row();
                    }
                    Ok(())
                }),
                element!("tbody td", |_el| {
                    if let Some(table) = page.borrow_mut().current_table() {
                        table.start_cell();
                    }
                    Ok(())
                }),
                text!("tbody td", |chunk| {
                    if let Some(table) = page.borrow_mut().current_table() {
                        table.push_text(chunk.as_str());
                    }
                    Ok(())
                }),
            ],
            ..RewriteStrSettings::default()
        },
    )
    .map_err(|err| FragmentError::Rewrite(err.to_string()))?;

    Ok(page.into_inner().finish())
}
