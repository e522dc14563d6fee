pub trait ApiKeyProvider {
    fn geocode_api_key(&self) -> String;
}

impl<T> ApiKeyProvider for &T
where
    T: ApiKeyProvider + ?Sized,
{
    fn geocode_api_key(&self) -> String {
        (**self).geocode_api_key()
    }
}
