//! Shared entity capabilities
//!
//! Entities never reference the game that owns them. Whatever global state
//! they need is handed in through a read-only [`SimContext`].

use super::collision::Rect;

/// Read-only view of global simulation values for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimContext {
    /// Global scroll speed (pixels per frame)
    pub speed: f32,
    /// Playfield width
    pub width: f32,
    /// Playfield height
    pub height: f32,
}

/// Something that occupies space and can be culled from its collection
pub trait Entity {
    /// Axis-aligned bounding box
    fn bounds(&self) -> Rect;

    /// Whether the entity should be dropped at the next cleanup pass
    fn is_marked_for_deletion(&self) -> bool;
}

/// Drop deleted entities, preserving the order of the survivors
pub fn retain_live<T: Entity>(items: &mut Vec<T>) {
    items.retain(|e| !e.is_marked_for_deletion());
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    struct Dummy {
        id: usize,
        dead: bool,
    }

    impl Entity for Dummy {
        fn bounds(&self) -> Rect {
            Rect::new(Vec2::ZERO, Vec2::ONE)
        }

        fn is_marked_for_deletion(&self) -> bool {
            self.dead
        }
    }

    proptest! {
        #[test]
        fn prop_retain_live_keeps_survivors_in_order(flags in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut items: Vec<Dummy> = flags
                .iter()
                .enumerate()
                .map(|(id, &dead)| Dummy { id, dead })
                .collect();
            retain_live(&mut items);

            let expected: Vec<usize> = flags
                .iter()
                .enumerate()
                .filter(|(_, dead)| !**dead)
                .map(|(id, _)| id)
                .collect();
            let got: Vec<usize> = items.iter().map(|d| d.id).collect();
            prop_assert_eq!(got, expected);
        }
    }
}
