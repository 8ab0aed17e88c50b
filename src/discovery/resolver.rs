//! Keyword-based module discovery across search roots

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::config::SCOPE_MARKER;
use crate::discovery::error::DiscoveryError;
use crate::discovery::fs::ModuleFs;
use crate::discovery::manifest::Manifest;

/// One discovered module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// Name declared in the manifest
    pub name: String,
    /// Search root the module was found under
    pub location: PathBuf,
    /// Directory of the package itself
    pub package_dir: PathBuf,
    pub manifest: Manifest,
}

/// Find every module under `roots` whose manifest declares `keyword`.
///
/// Roots are searched in order and a later root wins when two roots provide
/// the same module name. The result keeps the order in which names were first
/// seen, with scoped namespace directories expanded in place.
///
/// Unreadable directories and manifests are skipped. The call fails only when
/// none of the roots can be listed.
pub fn discover_modules<F, P>(
    fs: &F,
    keyword: &str,
    roots: &[P],
) -> Result<Vec<ModuleDescriptor>, DiscoveryError>
where
    F: ModuleFs + ?Sized,
    P: AsRef<Path>,
{
    let mut found: IndexMap<String, ModuleDescriptor> = IndexMap::new();
    let mut readable_roots = 0;

    for root in roots {
        let root = root.as_ref();
        let entries = match fs.list_directory(root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Skipping search root {:?}: {}", root, e);
                continue;
            }
        };
        readable_roots += 1;

        for entry in entries.iter().filter(|name| is_package_entry(name)) {
            let path = root.join(entry);

            if !entry.starts_with(SCOPE_MARKER) {
                collect_package(fs, keyword, root, &path, &mut found);
                continue;
            }

            match fs.list_directory(&path) {
                Ok(children) => {
                    for child in children.iter().filter(|name| is_package_entry(name)) {
                        collect_package(fs, keyword, root, &path.join(child), &mut found);
                    }
                }
                Err(e) => warn!("Skipping namespace directory {:?}: {}", path, e),
            }
        }
    }

    if readable_roots == 0 && !roots.is_empty() {
        return Err(DiscoveryError::NoAccessibleRoot(
            roots.iter().map(|root| root.as_ref().to_path_buf()).collect(),
        ));
    }

    info!("Discovered {} modules with keyword {}", found.len(), keyword);

    Ok(found.into_values().collect())
}

/// Hidden entries (`.bin`, `.package-lock.json`, ...) are npm bookkeeping
fn is_package_entry(name: &str) -> bool {
    !name.starts_with('.')
}

fn collect_package<F>(
    fs: &F,
    keyword: &str,
    root: &Path,
    package_dir: &Path,
    found: &mut IndexMap<String, ModuleDescriptor>,
) where
    F: ModuleFs + ?Sized,
{
    let manifest = match fs.read_manifest(package_dir) {
        Ok(manifest) => manifest,
        Err(e) if e.is_missing() => {
            debug!("No manifest in {:?}", package_dir);
            return;
        }
        Err(e) => {
            warn!("Skipping {:?}: {}", package_dir, e);
            return;
        }
    };

    if !manifest.has_keyword(keyword) {
        return;
    }

    let descriptor = ModuleDescriptor {
        name: manifest.name.clone(),
        location: root.to_path_buf(),
        package_dir: package_dir.to_path_buf(),
        manifest,
    };

    // Replacing keeps the first position in the map.
    if let Some(previous) = found.insert(descriptor.name.clone(), descriptor) {
        debug!(
            "{} in {:?} overrides {:?}",
            previous.name, root, previous.location
        );
    }
}
