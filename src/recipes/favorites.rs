use serde::Serialize;

/// Recipe ids the user has hearted during this session. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Favorites {
    ids: Vec<u32>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the favorite state of `recipe_id` and returns the new state.
    pub fn toggle(&mut self, recipe_id: u32) -> bool {
        if let Some(position) = self.ids.iter().position(|id| *id == recipe_id) {
            self.ids.remove(position);
            false
        } else {
            self.ids.push(recipe_id);
            true
        }
    }

    pub fn contains(&self, recipe_id: u32) -> bool {
        self.ids.contains(&recipe_id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        assert!(favorites.toggle(7));
        assert!(favorites.contains(7));
        assert!(!favorites.toggle(7));
        assert!(!favorites.contains(7));
    }

    #[test]
    fn test_keeps_insertion_order() {
        let mut favorites = Favorites::new();
        favorites.toggle(3);
        favorites.toggle(1);
        favorites.toggle(2);
        favorites.toggle(1);
        assert_eq!(favorites.ids(), &[3, 2]);
    }
}
