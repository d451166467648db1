use serde::{Deserialize, Serialize};

/// One named, iconified step in the displayed deployment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    pub label: String,
    pub icon: String,
}

impl Stage {
    pub fn new(label: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: icon.into(),
        }
    }
}

/// Fixed, ordered sequence of stages. Defined once at session start and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCatalog {
    stages: Vec<Stage>,
}

impl StageCatalog {
    pub fn new(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Stage> {
        self.stages.get(index)
    }

    /// Index of the terminal stage.
    pub fn last_index(&self) -> usize {
        self.stages.len().saturating_sub(1)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stage> {
        self.stages.iter()
    }
}

/// The reference eight-stage deployment sequence.
pub fn default_catalog() -> StageCatalog {
    StageCatalog::new(vec![
        Stage::new("Upload received", "⬆️"),
        Stage::new("Unpacking files", "🗜️"),
        Stage::new("Security audit", "🛡️"),
        Stage::new("Badge injection", "🏅"),
        Stage::new("Build & compile", "⚙️"),
        Stage::new("Serverless deploy", "☁️"),
        Stage::new("DNS update", "🌐"),
        Stage::new("Success!", "🎉"),
    ])
}
