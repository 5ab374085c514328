// file: src/knowledge_base/index.rs
// description: name-keyed lookup over the documents of one category
// reference: direct profile lookup by surname

use crate::knowledge_base::classifier::FileClassifier;
use crate::models::{Corpus, Document};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Documents of a single category keyed by [`FileClassifier::profile_key`].
#[derive(Debug, Clone, Default)]
pub struct ProfileIndex {
    category: String,
    entries: HashMap<String, Document>,
}

impl ProfileIndex {
    pub fn build(corpus: &Corpus, category: &str) -> Self {
        let mut entries = HashMap::new();

        for doc in corpus.of_type(category) {
            let Some(key) = FileClassifier::profile_key(Path::new(&doc.source)) else {
                debug!("No profile key for {}", doc.source);
                continue;
            };

            if let Some(previous) = entries.insert(key.clone(), doc.clone()) {
                warn!(
                    "Profile key '{}' from {} replaces {}",
                    key, doc.source, previous.source
                );
            }
        }

        Self {
            category: category.to_string(),
            entries,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn get(&self, name: &str) -> Option<&Document> {
        self.entries.get(&name.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
