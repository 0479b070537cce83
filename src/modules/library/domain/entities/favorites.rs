use serde::{Deserialize, Serialize};

/// Set of favorited work keys, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Favorites {
    keys: Vec<String>,
}

impl Favorites {
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Remove `key` if present, otherwise append it
    pub fn toggled(mut self, key: &str) -> Self {
        match self.keys.iter().position(|k| k == key) {
            Some(index) => {
                self.keys.remove(index);
            }
            None => self.keys.push(key.to_string()),
        }
        self
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl From<Vec<String>> for Favorites {
    fn from(stored: Vec<String>) -> Self {
        let mut keys: Vec<String> = Vec::with_capacity(stored.len());
        for key in stored {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        Self { keys }
    }
}

impl From<Favorites> for Vec<String> {
    fn from(favorites: Favorites) -> Self {
        favorites.keys
    }
}
