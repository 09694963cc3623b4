/*!
 * Simulated Disk
 * Async wrapper that adds artificial latency and tracing to every call
 */

use std::sync::Arc;
use std::time::Duration;

use super::traits::FileSystem;
use super::types::*;
use crate::core::config::LatencyProfile;
use crate::monitoring::span_fs;

/// Latency-injecting file system
///
/// Each operation sleeps for its configured delay and then runs the
/// synchronous backend call in one step. Dropping the future during the
/// delay leaves the tree untouched.
pub struct SimulatedFS<F: FileSystem> {
    inner: Arc<F>,
    latency: LatencyProfile,
}

impl<F: FileSystem> Clone for SimulatedFS<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            latency: self.latency,
        }
    }
}

impl<F: FileSystem> SimulatedFS<F> {
    pub fn new(inner: F, latency: LatencyProfile) -> Self {
        Self {
            inner: Arc::new(inner),
            latency,
        }
    }

    /// Backend without the artificial delay
    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn latency(&self) -> LatencyProfile {
        self.latency
    }

    async fn delay(duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }

    /// Run one backend call after `delay`
    ///
    /// The span opens once the delay has elapsed, so slow-call warnings
    /// measure the backend alone.
    async fn run<T>(
        &self,
        operation: &'static str,
        path: &VfsPath,
        delay: Duration,
        call: impl FnOnce(&F) -> VfsResult<T>,
    ) -> VfsResult<T> {
        Self::delay(delay).await;
        let span = span_fs(operation, &path.to_string());
        let outcome = call(&self.inner);
        span.record_outcome(&outcome);
        outcome
    }

    pub async fn read_file(&self, path: &VfsPath) -> VfsResult<String> {
        self.run("read_file", path, self.latency.read, |fs| fs.read_file(path))
            .await
    }

    pub async fn write_file(&self, path: &VfsPath, content: &str) -> VfsResult<WriteOutcome> {
        self.run("write_file", path, self.latency.mutate, |fs| {
            fs.write_file(path, content)
        })
        .await
    }

    pub async fn list_directory(&self, path: &VfsPath) -> VfsResult<Vec<FileSystemNode>> {
        self.run("list_directory", path, self.latency.list, |fs| {
            fs.list_directory(path)
        })
        .await
    }

    pub async fn create_directory(&self, path: &VfsPath) -> VfsResult<()> {
        self.run("create_directory", path, self.latency.mutate, |fs| {
            fs.create_directory(path)
        })
        .await
    }

    pub async fn delete_item(&self, path: &VfsPath) -> VfsResult<()> {
        self.run("delete_item", path, self.latency.mutate, |fs| {
            fs.delete_item(path)
        })
        .await
    }

    pub async fn rename_item(&self, path: &VfsPath, new_name: &str) -> VfsResult<VfsPath> {
        self.run("rename_item", path, self.latency.mutate, |fs| {
            fs.rename_item(path, new_name)
        })
        .await
    }

    pub async fn copy_item(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()> {
        self.run("copy_item", source, self.latency.mutate, |fs| {
            fs.copy_item(source, destination)
        })
        .await
    }

    pub async fn move_item(&self, source: &VfsPath, destination: &VfsPath) -> VfsResult<()> {
        self.run("move_item", source, self.latency.mutate, |fs| {
            fs.move_item(source, destination)
        })
        .await
    }

    pub async fn metadata(&self, path: &VfsPath) -> VfsResult<FileSystemNode> {
        self.run("metadata", path, self.latency.read, |fs| fs.metadata(path))
            .await
    }

    /// Existence checks are free
    pub fn exists(&self, path: &VfsPath) -> bool {
        self.inner.exists(path)
    }
}
