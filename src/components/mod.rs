// Reusable UI components

pub mod alert_banner;
pub mod confirm_modal;
pub mod wallet_form;
pub mod wallet_table;

pub use alert_banner::AlertBanner;
pub use confirm_modal::{ConfirmHost, ModalConfirm, PendingConfirm};
pub use wallet_form::WalletFormPanel;
pub use wallet_table::WalletTable;
