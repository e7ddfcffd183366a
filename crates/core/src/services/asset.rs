use std::collections::BTreeSet;

use crate::validate::validate_png_header;

/// Registers and resolves asset paths declared by the game description.
/// `validate_asset` only checks well-formedness it can determine without a
/// filesystem — callers that have the bytes should use
/// [`crate::validate::validate_png_header`] directly for a real check.
pub trait AssetService {
    fn register_asset(&mut self, path: String);
    fn get_asset_paths(&self) -> BTreeSet<String>;
    fn resolve_asset(&self, path: &str) -> Option<String>;
    fn validate_asset(&mut self, path: &str) -> bool;
}

#[derive(Debug, Default)]
pub struct DefaultAssetService {
    paths: BTreeSet<String>,
}

impl AssetService for DefaultAssetService {
    fn register_asset(&mut self, path: String) {
        self.paths.insert(path);
    }

    fn get_asset_paths(&self) -> BTreeSet<String> {
        self.paths.clone()
    }

    fn resolve_asset(&self, path: &str) -> Option<String> {
        self.paths.get(path).cloned()
    }

    fn validate_asset(&mut self, path: &str) -> bool {
        self.paths.contains(path)
    }
}

#[derive(Debug, Default)]
pub struct MockAssetService {
    paths: BTreeSet<String>,
    pub registered_assets: Vec<String>,
    pub validation_calls: Vec<String>,
}

impl MockAssetService {
    pub fn reset(&mut self) {
        self.paths.clear();
        self.registered_assets.clear();
        self.validation_calls.clear();
    }

    /// Validates PNG bytes registered under `path`, recording the call.
    /// Exposed for tests that want real header validation rather than the
    /// trivial "was it registered" stand-in `validate_asset` performs.
    pub fn validate_png(&mut self, path: &str, bytes: &[u8]) -> bool {
        self.validation_calls.push(path.to_string());
        validate_png_header(bytes, path).is_valid
    }
}

impl AssetService for MockAssetService {
    fn register_asset(&mut self, path: String) {
        self.registered_assets.push(path.clone());
        self.paths.insert(path);
    }

    fn get_asset_paths(&self) -> BTreeSet<String> {
        self.paths.clone()
    }

    fn resolve_asset(&self, path: &str) -> Option<String> {
        self.paths.get(path).cloned()
    }

    fn validate_asset(&mut self, path: &str) -> bool {
        self.validation_calls.push(path.to_string());
        self.paths.contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_service_resolves_registered_paths() {
        let mut service = DefaultAssetService::default();
        service.register_asset("sprites/player.png".into());
        assert_eq!(service.resolve_asset("sprites/player.png"), Some("sprites/player.png".to_string()));
        assert_eq!(service.resolve_asset("sprites/missing.png"), None);
    }

    #[test]
    fn mock_service_records_registrations_and_validation_calls() {
        let mut mock = MockAssetService::default();
        mock.register_asset("tiles/floor.png".into());
        assert!(mock.validate_asset("tiles/floor.png"));
        assert_eq!(mock.registered_assets, vec!["tiles/floor.png".to_string()]);
        assert_eq!(mock.validation_calls, vec!["tiles/floor.png".to_string()]);
        mock.reset();
        assert!(mock.registered_assets.is_empty());
        assert!(mock.get_asset_paths().is_empty());
    }
}
