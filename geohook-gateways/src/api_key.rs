use geohook_core::gateways::config::ApiKeyProvider;

/// An API key that is known at startup.
#[derive(Clone)]
pub struct StaticApiKey(String);

impl StaticApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl std::fmt::Debug for StaticApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StaticApiKey(***)")
    }
}

impl ApiKeyProvider for StaticApiKey {
    fn geocode_api_key(&self) -> String {
        self.0.clone()
    }
}
