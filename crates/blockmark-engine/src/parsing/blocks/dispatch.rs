//! Parallel line classification.
//!
//! Every line is an independent task: classification only reads its own line
//! and has no side effects. Tasks run on a bounded set of scoped worker
//! threads, and each result travels back over a completion channel tagged with
//! its source line index. Completion order is arbitrary, so results are
//! sorted by index before anything downstream sees them.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    mpsc,
};
use std::thread;

use super::{
    classify::MarkdownLineClassifier,
    types::{BlockToken, ClassifiedLine},
};

/// Classifies every line on up to `max_threads` workers and returns the
/// results in source order.
///
/// With a single worker, or fewer than two lines, classification runs inline
/// on the calling thread. Nested classification inside quotes and list items
/// stays on the worker that claimed the line.
pub fn classify_lines(lines: &[&str], max_threads: usize) -> Vec<ClassifiedLine> {
    let workers = max_threads.clamp(1, lines.len().max(1));

    if workers == 1 || lines.len() < 2 {
        log::debug!("classifying {} lines inline", lines.len());
        let classifier = MarkdownLineClassifier;
        let completed = lines
            .iter()
            .enumerate()
            .map(|(index, line)| (index, classifier.classify(line)))
            .collect();
        return reassemble(lines, completed);
    }

    log::debug!("classifying {} lines on {workers} workers", lines.len());

    let next = AtomicUsize::new(0);
    let (tx, rx) = mpsc::channel::<(usize, BlockToken)>();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = tx.clone();
            let next = &next;
            scope.spawn(move || {
                let classifier = MarkdownLineClassifier;
                loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    let Some(line) = lines.get(index) else {
                        break;
                    };
                    if tx.send((index, classifier.classify(line))).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(tx);

    reassemble(lines, rx.into_iter().collect())
}

/// Restores source order for results that completed in any order.
///
/// Each index must come from `lines`; the raw line text is attached so the
/// merge pass can buffer code lines verbatim.
pub(crate) fn reassemble(
    lines: &[&str],
    mut completed: Vec<(usize, BlockToken)>,
) -> Vec<ClassifiedLine> {
    completed.sort_by_key(|(index, _)| *index);
    completed
        .into_iter()
        .map(|(index, token)| ClassifiedLine {
            index,
            raw: lines[index].to_string(),
            token,
        })
        .collect()
}
