//! Scheduling over the full task set of one clip: dedup, ordering and path resolution.

use std::collections::HashSet;

use clip_logging::{clip_debug, clip_warn};

use crate::{Task, TaskKind};

/// Paths of a task set inside the archive, index-aligned with the input tasks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedPaths {
    pub paths: Vec<String>,
    pub main_path: Option<String>,
}

/// Task set ready to hand to the executor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreparedTaskSet {
    pub tasks: Vec<Task>,
    pub paths: Vec<String>,
    pub main_path: Option<String>,
}

/// Keep the first task for each filename, in input order.
pub fn dedupe_by_filename(tasks: Vec<Task>) -> Vec<Task> {
    let mut seen = HashSet::with_capacity(tasks.len());
    tasks
        .into_iter()
        .filter(|task| {
            let first = seen.insert(task.filename().to_string());
            if !first {
                clip_debug!("dropping duplicate {} task {}", task.kind(), task.filename());
            }
            first
        })
        .collect()
}

/// Inline tasks first, then remote ones; relative order is kept within each group.
///
/// Fetches may stall or fail, so the in-memory content is written before them.
pub fn order_for_execution(tasks: Vec<Task>) -> Vec<Task> {
    let (mut inline, remote): (Vec<Task>, Vec<Task>) =
        tasks.into_iter().partition(Task::is_inline);
    inline.extend(remote);
    inline
}

/// Join each filename onto `base_dir` and pick out the main document's path.
///
/// Paths always use `/`. Segments of the filename that could climb out of
/// `base_dir` are escaped rather than interpreted, which keeps distinct
/// filenames on distinct paths.
///
/// With several main document tasks the first one's path is reported and the
/// others are logged and otherwise treated like any other task.
pub fn resolve_paths(tasks: &[Task], base_dir: &str) -> ResolvedPaths {
    let base = match base_dir.trim_end_matches(['/', '\\']) {
        "" if !base_dir.is_empty() => "/",
        trimmed => trimmed,
    };
    let mut main_path = None;
    let paths = tasks
        .iter()
        .map(|task| {
            let path = join_archive_path(base, task.filename());
            if task.kind() == TaskKind::MainDocument {
                if main_path.is_none() {
                    main_path = Some(path.clone());
                } else {
                    clip_warn!("ignoring extra main document task {}", task.filename());
                }
            }
            path
        })
        .collect();
    ResolvedPaths { paths, main_path }
}

/// Dedup, order and resolve in one pass over a finished clip.
pub fn prepare_task_set(tasks: Vec<Task>, base_dir: &str) -> PreparedTaskSet {
    let tasks = order_for_execution(dedupe_by_filename(tasks));
    let ResolvedPaths { paths, main_path } = resolve_paths(&tasks, base_dir);
    PreparedTaskSet {
        tasks,
        paths,
        main_path,
    }
}

fn join_archive_path(base: &str, filename: &str) -> String {
    let relative = filename
        .split('/')
        .map(escape_segment)
        .collect::<Vec<_>>()
        .join("/");
    if base.is_empty() {
        relative
    } else if base == "/" {
        format!("/{relative}")
    } else {
        format!("{base}/{relative}")
    }
}

// Escaping is reversible: `%` itself is escaped, so escaped output never
// collides with a literal segment.
fn escape_segment(segment: &str) -> String {
    match segment {
        "" => "%00".to_string(),
        "." => "%2E".to_string(),
        ".." => "%2E%2E".to_string(),
        _ => {
            let mut out = String::with_capacity(segment.len());
            for c in segment.chars() {
                match c {
                    '%' => out.push_str("%25"),
                    '\\' => out.push_str("%5C"),
                    ':' => out.push_str("%3A"),
                    c => out.push(c),
                }
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_segment_handles_dot_segments() {
        assert_eq!(escape_segment(".."), "%2E%2E");
        assert_eq!(escape_segment("."), "%2E");
        assert_eq!(escape_segment(""), "%00");
        assert_eq!(escape_segment("..."), "...");
        assert_eq!(escape_segment("a%2E"), "a%252E");
    }

    #[test]
    fn join_keeps_backslashes_inside_a_segment() {
        assert_eq!(join_archive_path("clip", "..\\..\\x.png"), "clip/..%5C..%5Cx.png");
        assert_eq!(join_archive_path("", "C:/x.png"), "C%3A/x.png");
    }
}
