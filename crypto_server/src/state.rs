use crypto_core::CryptoService;

pub struct ServerState {
    service: CryptoService,
}

impl From<CryptoService> for ServerState {
    fn from(service: CryptoService) -> Self {
        Self { service }
    }
}

impl ServerState {
    pub fn service(&self) -> &CryptoService {
        &self.service
    }
}
