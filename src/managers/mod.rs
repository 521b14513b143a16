// SecureVault managers
// Managers own in-memory state: the credential vault and the ephemeral view state.

pub mod vault_manager;
pub mod view_state;
