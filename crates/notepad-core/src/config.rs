//! Note store configuration

/// Configuration for the note store controller.
///
/// The defaults match the testnet deployment of the notepad contract.
#[derive(Clone, Debug)]
pub struct NotepadConfig {
    /// Account address where the notepad contract is deployed.
    pub contract_address: String,
    /// Storage path of the notepad resource inside the user's account.
    pub storage_path: String,
    /// Public path of the published notepad capability.
    pub public_path: String,
    /// Gas limit applied to every mutating transaction.
    pub gas_limit: u64,
}

impl Default for NotepadConfig {
    fn default() -> Self {
        Self {
            contract_address: "0x9bde7238c9c39e97".to_string(),
            storage_path: "NotepadV1".to_string(),
            public_path: "PublicNotepadV1".to_string(),
            gas_limit: 1000,
        }
    }
}
