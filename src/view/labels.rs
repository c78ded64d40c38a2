// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

/// Marks a label whose front was cut off.
pub const ELLIPSIS: &str = "..";

/// Shortens tab labels longer than `max_len` characters by cutting from the front, so the
/// file name stays readable. Labels that collide after cutting get a `-n` suffix; every
/// shortened label is exactly `max_len` characters long.
pub fn truncate_labels(labels: &[String], max_len: usize) -> Vec<String> {
    let mut tails: Vec<Option<String>> = labels
        .iter()
        .map(|label| {
            (label.chars().count() > max_len).then(|| keep_last(label, max_len.saturating_sub(2)))
        })
        .collect();

    loop {
        let counts = tail_counts(&tails);
        let mut changed = false;
        for tail in tails.iter_mut().flatten() {
            let count = counts.get(tail.as_str()).copied().unwrap_or(1);
            if count < 2 {
                continue;
            }
            let required = max_len.saturating_sub(digits(count) + 3);
            if tail.chars().count() > required {
                *tail = keep_last(tail, required);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let counts = tail_counts(&tails);
    let mut numbered: HashMap<String, usize> = HashMap::new();
    labels
        .iter()
        .zip(tails)
        .map(|(label, tail)| match tail {
            None => label.clone(),
            Some(tail) if counts.get(tail.as_str()).copied().unwrap_or(1) > 1 => {
                let n = numbered.entry(tail.clone()).or_insert(0);
                *n += 1;
                format!("{ELLIPSIS}{tail}-{n}")
            }
            Some(tail) => format!("{ELLIPSIS}{tail}"),
        })
        .collect()
}

fn tail_counts(tails: &[Option<String>]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for tail in tails.iter().flatten() {
        *counts.entry(tail.clone()).or_insert(0) += 1;
    }
    counts
}

fn keep_last(value: &str, chars: usize) -> String {
    let skip = value.chars().count().saturating_sub(chars);
    value.chars().skip(skip).collect()
}

fn digits(mut n: usize) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}
