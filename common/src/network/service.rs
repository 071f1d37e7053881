/// Service detected behind a port. nmap omits attributes it could not
/// determine, those come back as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Service {
    name: String,
    product: String,
    version: String,
}

impl Service {
    pub fn new(
        name: impl Into<String>,
        product: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            product: product.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `true` when nmap reported nothing about the service.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.product.is_empty() && self.version.is_empty()
    }
}
