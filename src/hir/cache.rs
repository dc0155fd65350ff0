//! The process-wide package cache.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::ids::ImportPath;
use super::input::PackageDescriptor;
use super::package::Package;

/// Concurrent map from import path to [`Package`].
///
/// The cache owns every package and holds at most one per import path.
/// Packages are published fully built: a package becomes visible only after
/// all of its import edges are wired, and is never changed afterwards.
///
/// Reads share a single reader/writer lock; each newly discovered package
/// costs one short exclusive section that runs no callbacks.
#[derive(Default)]
pub struct GlobalCache {
    packages: RwLock<FxHashMap<ImportPath, Arc<Package>>>,
}

impl GlobalCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a package, replacing any package with the same import path.
    ///
    /// Packages already published keep their edges to the replaced instance.
    pub fn put(&self, package: Arc<Package>) {
        let path = package.import_path().clone();
        self.packages.write().insert(path, package);
    }

    pub fn get(&self, import_path: &str) -> Option<Arc<Package>> {
        self.packages.read().get(import_path).cloned()
    }

    pub fn contains(&self, import_path: &str) -> bool {
        self.packages.read().contains_key(import_path)
    }

    /// Visit every package, in no particular order, until `visit` returns
    /// `true`.
    ///
    /// The shared lock is held for the whole walk, so `visit` must not call
    /// [`put`](Self::put) or [`add`](Self::add) on this cache: that would
    /// deadlock.
    pub fn walk(&self, mut visit: impl FnMut(&Arc<Package>) -> bool) {
        let packages = self.packages.read();
        for package in packages.values() {
            if visit(package) {
                return;
            }
        }
    }

    /// Register a package and, recursively, everything it imports.
    ///
    /// Packages already in the cache are reused, never rebuilt, so shared
    /// dependencies are registered once and every importer links to the same
    /// instance. Returns the cached instance for `desc`.
    pub fn add(&self, desc: &PackageDescriptor) -> Arc<Package> {
        if let Some(existing) = self.get(desc.import_path.as_str()) {
            tracing::trace!(import_path = %desc.import_path, "package already cached");
            return existing;
        }

        let mut package = Package::from_descriptor(desc);

        // Edges are complete before anyone else can observe the package.
        for import in &desc.imports {
            let dep = self.add(import);
            package.add_import(&dep);
        }

        self.publish(package)
    }

    /// Insert a freshly built package unless another thread got there first,
    /// in which case the already published instance wins.
    fn publish(&self, package: Package) -> Arc<Package> {
        let mut packages = self.packages.write();
        if let Some(existing) = packages.get(package.import_path()) {
            tracing::trace!(import_path = %package.import_path(), "lost publish race");
            return existing.clone();
        }

        tracing::debug!(
            import_path = %package.import_path(),
            files = package.files().len(),
            imports = package.import_paths().len(),
            "package cached"
        );
        let package = Arc::new(package);
        packages.insert(package.import_path().clone(), package.clone());
        package
    }

    pub fn len(&self) -> usize {
        self.packages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted snapshot of the cached import paths.
    pub fn import_paths(&self) -> Vec<ImportPath> {
        let mut paths: Vec<_> = self.packages.read().keys().cloned().collect();
        paths.sort();
        paths
    }

    /// Snapshot of every cached package, in no particular order.
    pub fn packages(&self) -> Vec<Arc<Package>> {
        self.packages.read().values().cloned().collect()
    }
}

impl fmt::Debug for GlobalCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlobalCache")
            .field("count", &self.len())
            .finish()
    }
}
