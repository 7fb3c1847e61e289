use crate::services::wallet_api::{Wallet, WalletId};

/// Last wallet list read from the server
///
/// There is no way to edit entries; the only write is `replace` with a fresh
/// server read, so the list never shows a locally guessed state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletCache {
    wallets: Vec<Wallet>,
}

impl WalletCache {
    pub fn replace(&mut self, wallets: Vec<Wallet>) {
        self.wallets = wallets;
    }

    pub fn find(&self, id: WalletId) -> Option<&Wallet> {
        self.wallets.iter().find(|w| w.id == id)
    }

    #[cfg(test)]
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.wallets.len()
    }
}
