use std::fmt;

/// Displays a slice as a bulleted list, one entry per line.
///
/// Log records which enumerate things (extension names, adapter names) read
/// better this way than as a Debug-printed vector on one line.
pub struct BulletList<'items, T>(pub &'items [T]);

impl<'items, T> fmt::Display for BulletList<'items, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.0 {
            write!(f, "\n  - {}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_entry_starts_its_own_line() {
        let rendered =
            format!("{}", BulletList(&["VK_KHR_surface", "VK_KHR_xcb_surface"]));
        assert_eq!(rendered, "\n  - VK_KHR_surface\n  - VK_KHR_xcb_surface");
    }

    #[test]
    fn an_empty_list_renders_nothing() {
        let rendered = format!("{}", BulletList::<&str>(&[]));
        assert_eq!(rendered, "");
    }
}
