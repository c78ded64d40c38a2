// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cell::RefCell;
use std::fmt;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::markup::{parse_report_page, FragmentError, ReportOutline};
use crate::model::{SessionId, TableId};
use crate::view::{DeliveryError, LoadError, ShutdownTransport, TableSource};

use super::endpoints::load_table_url;

#[derive(Debug)]
pub enum PageError {
    Request(String),
    Status(u16),
    Parse(FragmentError),
}

impl fmt::Display for PageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Request(message) => write!(f, "report page request failed: {message}"),
            Self::Status(status) => write!(f, "report page returned status {status}"),
            Self::Parse(err) => write!(f, "report page is malformed: {err}"),
        }
    }
}

impl std::error::Error for PageError {}

/// Talks to the report server that served the page.
#[derive(Debug, Clone)]
pub struct HttpTableSource {
    client: reqwest::Client,
    page_url: Url,
}

impl HttpTableSource {
    pub fn new(page_url: Url, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
            page_url,
        }
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    pub async fn fetch_report_page(&self) -> Result<ReportOutline, PageError> {
        let resp = self
            .client
            .get(self.page_url.clone())
            .send()
            .await
            .map_err(|e| PageError::Request(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(PageError::Status(resp.status().as_u16()));
        }
        let body = resp.text().await.map_err(|e| PageError::Request(e.to_string()))?;
        parse_report_page(&body).map_err(PageError::Parse)
    }
}

impl TableSource for HttpTableSource {
    async fn load_table(
        &self,
        table_id: &TableId,
        session_id: &SessionId,
    ) -> Result<String, LoadError> {
        let url = load_table_url(&self.page_url, table_id, session_id);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Request(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status().as_u16()));
        }
        resp.text().await.map_err(|e| LoadError::Request(e.to_string()))
    }
}

/// Delivers the shutdown notice over HTTP. Beacons run on their own thread so they are not
/// tied to the async runtime; dropping the transport waits for them.
#[derive(Debug)]
pub struct HttpShutdownTransport {
    timeout: Duration,
    beacons: RefCell<Vec<JoinHandle<()>>>,
}

impl HttpShutdownTransport {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            beacons: RefCell::default(),
        }
    }
}

impl ShutdownTransport for HttpShutdownTransport {
    fn send_beacon(&self, url: &Url) -> bool {
        let url = url.clone();
        let timeout = self.timeout;
        let spawned = thread::Builder::new()
            .name("blameview-shutdown".to_owned())
            .spawn(move || {
                if let Err(err) = post_empty(&url, timeout) {
                    debug!(url = %url, error = %err, "shutdown beacon failed");
                }
            });
        match spawned {
            Ok(handle) => {
                self.beacons.borrow_mut().push(handle);
                true
            }
            Err(err) => {
                debug!(error = %err, "cannot spawn shutdown beacon");
                false
            }
        }
    }

    fn send_blocking(&self, url: &Url) -> Result<(), DeliveryError> {
        // The blocking client must not run on a runtime thread.
        if tokio::runtime::Handle::try_current().is_ok() {
            return Err(DeliveryError::new("blocking request inside async runtime"));
        }
        post_empty(url, self.timeout)
    }
}

impl Drop for HttpShutdownTransport {
    fn drop(&mut self) {
        for handle in self.beacons.get_mut().drain(..) {
            if handle.join().is_err() {
                debug!("shutdown beacon thread panicked");
            }
        }
    }
}

fn post_empty(url: &Url, timeout: Duration) -> Result<(), DeliveryError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DeliveryError::new(e.to_string()))?;
    client
        .post(url.clone())
        .send()
        .map_err(|e| DeliveryError::new(e.to_string()))?;
    Ok(())
}
