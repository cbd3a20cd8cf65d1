// Cartridge module - ROM loading and mapper implementation
// This module will contain cartridge and mapper implementations

/// Cartridge structure representing a loaded ROM
pub struct Cartridge {
    // Placeholder for future cartridge implementation
}

impl Cartridge {
    /// Create a new empty cartridge
    pub fn new() -> Self {
        Cartridge {}
    }
}

impl Default for Cartridge {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartridge_initialization() {
        let _cartridge = Cartridge::new();
        // Basic initialization test
    }
}
