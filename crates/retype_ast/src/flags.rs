//! Flag types for class members.

use crate::node::Accessibility;

bitflags::bitflags! {
    /// Modifiers written before a class member.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u8 {
        const NONE              = 0;
        const PUBLIC            = 1 << 0;
        const PRIVATE           = 1 << 1;
        const PROTECTED         = 1 << 2;
        const STATIC            = 1 << 3;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
    }
}

impl ModifierFlags {
    pub fn from_accessibility(accessibility: Accessibility) -> Self {
        match accessibility {
            Accessibility::Public => ModifierFlags::PUBLIC,
            Accessibility::Private => ModifierFlags::PRIVATE,
            Accessibility::Protected => ModifierFlags::PROTECTED,
        }
    }

    pub fn accessibility(self) -> Option<Accessibility> {
        if self.contains(ModifierFlags::PRIVATE) {
            Some(Accessibility::Private)
        } else if self.contains(ModifierFlags::PROTECTED) {
            Some(Accessibility::Protected)
        } else if self.contains(ModifierFlags::PUBLIC) {
            Some(Accessibility::Public)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_static(self) -> bool {
        self.contains(ModifierFlags::STATIC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessibility_round_trip() {
        let flags = ModifierFlags::from_accessibility(Accessibility::Protected) | ModifierFlags::STATIC;
        assert_eq!(flags.accessibility(), Some(Accessibility::Protected));
        assert!(flags.is_static());
        assert!(flags.intersects(ModifierFlags::ACCESSIBILITY_MODIFIER));
        assert_eq!(ModifierFlags::NONE.accessibility(), None);
    }
}
