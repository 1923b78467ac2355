//! Async directory tree construction.
//!
//! The builder walks a root concurrently, applies the exclusion policy at
//! every level, and caches listings per `(path, depth)` so repeated builds
//! over an unchanged view cost nothing. Every filesystem failure degrades to
//! an empty result for the affected node; a build never returns an error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering::Relaxed};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::filter::ExclusionPolicy;
use crate::fs::{EntryKind, FileSystem};
use crate::tree::types::{NodeKind, TreeNode, TreeStats};

/// Knobs for a traversal. Depth counts levels below the root: a node at
/// depth `d` is expanded iff `d < max_depth`, so `max_depth` is the deepest
/// level whose entries appear in the tree.
#[derive(Debug, Clone)]
pub struct TreeOptions {
    pub max_depth: usize,
    pub show_file_size: bool,
    pub show_file_date: bool,
    /// Upper bound on concurrent directory listings.
    pub concurrency: usize,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            max_depth: 10,
            show_file_size: true,
            show_file_date: false,
            concurrency: 8,
        }
    }
}

type CacheKey = (PathBuf, usize);

/// Concurrent, cached tree walker over an abstract filesystem.
///
/// Cloning yields another handle to the same walker; the cache, counters,
/// and cancellation flag are shared.
pub struct TreeBuilder<F> {
    inner: Arc<Walker<F>>,
}

impl<F> Clone for TreeBuilder<F> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

struct Walker<F> {
    fs: F,
    policy: ExclusionPolicy,
    options: TreeOptions,
    cache: RwLock<HashMap<CacheKey, Vec<TreeNode>>>,
    listing_permits: Semaphore,
    cancelled: AtomicBool,
    directories_listed: AtomicU64,
    error_count: AtomicU64,
    cache_hits: AtomicU64,
}

impl<F: FileSystem> TreeBuilder<F> {
    pub fn new(fs: F, policy: ExclusionPolicy, options: TreeOptions) -> Self {
        let permits = options.concurrency.max(1);
        Self {
            inner: Arc::new(Walker {
                fs,
                policy,
                options,
                cache: RwLock::new(HashMap::new()),
                listing_permits: Semaphore::new(permits),
                cancelled: AtomicBool::new(false),
                directories_listed: AtomicU64::new(0),
                error_count: AtomicU64::new(0),
                cache_hits: AtomicU64::new(0),
            }),
        }
    }

    /// Build the filtered tree rooted at `root`. Always succeeds; unreadable
    /// directories contribute empty results and bump the error counter.
    pub async fn build(&self, root: &Path) -> Vec<TreeNode> {
        Arc::clone(&self.inner).walk(root.to_path_buf(), 0).await
    }

    /// Signal a running build to stop. Partial results produced after the
    /// signal are not cached.
    pub fn cancel(&self) {
        self.inner.cancelled.store(true, Relaxed);
    }

    /// Drop every cached listing. The next build re-reads the filesystem.
    pub fn clear_cache(&self) {
        if let Ok(mut cache) = self.inner.cache.write() {
            cache.clear();
        }
    }

    /// Snapshot of the traversal counters.
    pub fn stats(&self) -> TreeStats {
        TreeStats {
            directories_listed: self.inner.directories_listed.load(Relaxed),
            error_count: self.inner.error_count.load(Relaxed),
            cache_hits: self.inner.cache_hits.load(Relaxed),
        }
    }
}

impl<F: FileSystem> Walker<F> {
    fn walk(
        self: Arc<Self>,
        dir: PathBuf,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = Vec<TreeNode>> + Send>> {
        Box::pin(async move {
            if self.cancelled.load(Relaxed) {
                return Vec::new();
            }

            let key = (dir.clone(), depth);
            if let Ok(cache) = self.cache.read() {
                if let Some(cached) = cache.get(&key) {
                    self.cache_hits.fetch_add(1, Relaxed);
                    return cached.clone();
                }
            }

            // The permit covers the listing and per-entry detail reads only.
            // Holding it across child recursion would deadlock once the walk
            // fans out wider than the permit count.
            let mut nodes = {
                let Ok(_permit) = self.listing_permits.acquire().await else {
                    return Vec::new();
                };

                self.directories_listed.fetch_add(1, Relaxed);
                let entries = match self.fs.list_directory(&dir).await {
                    Ok(entries) => entries,
                    Err(err) => {
                        self.error_count.fetch_add(1, Relaxed);
                        tracing::warn!("cannot list {}: {}", dir.display(), err);
                        return Vec::new();
                    }
                };

                let mut nodes = Vec::with_capacity(entries.len());
                for entry in entries {
                    if self.policy.is_excluded(&entry.name) {
                        continue;
                    }
                    let kind = match entry.kind {
                        EntryKind::Directory => NodeKind::Directory,
                        EntryKind::File => NodeKind::File,
                    };
                    let mut node = TreeNode {
                        path: dir.join(&entry.name),
                        name: entry.name,
                        kind,
                        size: None,
                        modified: None,
                        children: None,
                    };
                    if kind == NodeKind::File
                        && (self.options.show_file_size || self.options.show_file_date)
                    {
                        match self.fs.stat(&node.path).await {
                            Ok(info) => {
                                if self.options.show_file_size {
                                    node.size = Some(info.size);
                                }
                                if self.options.show_file_date {
                                    node.modified = info.modified.map(DateTime::<Utc>::from);
                                }
                            }
                            Err(err) => {
                                tracing::debug!(
                                    "no metadata for {}: {}",
                                    node.path.display(),
                                    err
                                );
                            }
                        }
                    }
                    nodes.push(node);
                }
                nodes
            };

            if depth + 1 < self.options.max_depth {
                let mut children = JoinSet::new();
                for (index, node) in nodes.iter().enumerate() {
                    if node.kind != NodeKind::Directory {
                        continue;
                    }
                    let walker = Arc::clone(&self);
                    let child_dir = node.path.clone();
                    children
                        .spawn(async move { (index, walker.walk(child_dir, depth + 1).await) });
                }
                while let Some(joined) = children.join_next().await {
                    match joined {
                        Ok((index, resolved)) => nodes[index].children = Some(resolved),
                        Err(err) => {
                            self.error_count.fetch_add(1, Relaxed);
                            tracing::warn!("traversal task failed: {err}");
                        }
                    }
                }
            }

            // Directories first, then byte-wise by name. Sorting after the
            // tasks resolve keeps output deterministic regardless of
            // completion order.
            nodes.sort_by(|a, b| match (a.kind, b.kind) {
                (NodeKind::Directory, NodeKind::File) => std::cmp::Ordering::Less,
                (NodeKind::File, NodeKind::Directory) => std::cmp::Ordering::Greater,
                _ => a.name.cmp(&b.name),
            });

            if !self.cancelled.load(Relaxed) {
                if let Ok(mut cache) = self.cache.write() {
                    cache.insert(key, nodes.clone());
                }
            }
            nodes
        })
    }
}
