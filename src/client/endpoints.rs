// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use url::Url;

use crate::model::{SessionId, TableId};

/// `GET /load-table/{tableId}?id={sessionId}` on the origin of `page_url`.
pub fn load_table_url(page_url: &Url, table_id: &TableId, session_id: &SessionId) -> Url {
    endpoint(page_url, &["load-table", table_id.as_str()], session_id)
}

/// `POST /shutdown?id={sessionId}` on the origin of `page_url`.
pub fn shutdown_url(page_url: &Url, session_id: &SessionId) -> Url {
    endpoint(page_url, &["shutdown"], session_id)
}

fn endpoint(page_url: &Url, segments: &[&str], session_id: &SessionId) -> Url {
    let mut url = page_url.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.set_path("/");
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url.query_pairs_mut().append_pair("id", session_id.as_str());
    url
}
