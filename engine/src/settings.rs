use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::timer::DifficultyCurve;
use crate::types::{FieldSize, Layout};

// Field geometry, arena layout, and the three difficulty curves. Walls
// only start spawning once the snake is longer than wall_gate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub field_width: usize,
    pub field_height: usize,
    pub layout: Layout,
    pub movement_curve: DifficultyCurve,
    pub fruit_curve: DifficultyCurve,
    pub wall_curve: DifficultyCurve,
    pub wall_gate: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            field_width: 20,
            field_height: 20,
            layout: Layout::Open,
            movement_curve: DifficultyCurve::new(80, 300, 50),
            fruit_curve: DifficultyCurve::new(1000, 5000, 50),
            wall_curve: DifficultyCurve::new(5000, 10000, 100),
            wall_gate: 40,
        }
    }
}

impl GameSettings {
    pub fn field_size(&self) -> FieldSize {
        FieldSize::new(self.field_width, self.field_height)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.field_width < 10 || self.field_width > 100 {
            return Err("Field width must be between 10 and 100".to_string());
        }
        if self.field_height < 10 || self.field_height > 100 {
            return Err("Field height must be between 10 and 100".to_string());
        }
        for (name, curve) in [
            ("Movement", &self.movement_curve),
            ("Fruit", &self.fruit_curve),
            ("Wall", &self.wall_curve),
        ] {
            if curve.min_ms == 0 {
                return Err(format!("{} curve minimum must be positive", name));
            }
            if curve.min_ms > curve.max_ms {
                return Err(format!("{} curve minimum exceeds its maximum", name));
            }
            if curve.threshold == 0 {
                return Err(format!("{} curve threshold must be at least 1", name));
            }
        }
        if self.wall_gate == 0 {
            return Err("Wall gate must be at least 1".to_string());
        }
        Ok(())
    }

    // A missing file yields defaults; anything loaded is validated
    // before use.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let content = match std::fs::read_to_string(path.as_ref()) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(format!("Failed to read settings file: {}", err)),
        };

        let settings: Self = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize settings: {}", e))?;
        settings
            .validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;
        Ok(settings)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), String> {
        self.validate()
            .map_err(|e| format!("Settings validation error: {}", e))?;
        let content = serde_yaml_ng::to_string(self)
            .map_err(|e| format!("Failed to serialize settings: {}", e))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| format!("Failed to write settings file: {}", e))
    }
}
