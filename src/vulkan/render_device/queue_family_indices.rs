use super::AdapterProfile;

/// The indices of the queue families this application uses on an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueFamilyIndices {
    pub graphics_family_index: u32,
    pub present_family_index: u32,
}

impl QueueFamilyIndices {
    /// Resolve the graphics and presentation families on an adapter.
    ///
    /// Each role picks the first family which supports it, so the two
    /// indices often refer to the same family. Returns None when either
    /// role cannot be filled.
    pub fn find(adapter: &AdapterProfile) -> Option<Self> {
        let graphics_family_index = adapter
            .queue_families
            .iter()
            .position(|family| family.supports_graphics)?;
        let present_family_index = adapter
            .queue_families
            .iter()
            .position(|family| family.supports_present)?;
        Some(Self {
            graphics_family_index: graphics_family_index as u32,
            present_family_index: present_family_index as u32,
        })
    }
}
