use glam::Vec3;
use uuid::Uuid;

/// Shadow-map parameters for shadow-casting lights.
#[derive(Debug, Clone)]
pub struct ShadowConfig {
    pub bias: f32,
    pub map_size: u32,
    /// PCF soft filtering on the shadow edge.
    pub soft: bool,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            bias: 0.005,
            map_size: 1024,
            soft: true,
        }
    }
}

/// Light component in the scene.
#[derive(Debug, Clone)]
pub enum LightKind {
    /// Uniform fill light with no position.
    Ambient,
    /// Parallel light shining from `position` toward the origin.
    Directional { position: Vec3 },
}

#[derive(Debug, Clone)]
pub struct Light {
    pub uuid: Uuid,
    pub color: Vec3,
    pub intensity: f32,
    pub kind: LightKind,

    pub cast_shadows: bool,
    pub shadow: Option<ShadowConfig>,
}

impl Light {
    #[must_use]
    pub fn new_ambient(color: Vec3, intensity: f32) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Ambient,
            cast_shadows: false,
            shadow: None,
        }
    }

    #[must_use]
    pub fn new_directional(color: Vec3, intensity: f32, position: Vec3) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            color,
            intensity,
            kind: LightKind::Directional { position },
            cast_shadows: false,
            shadow: Some(ShadowConfig::default()),
        }
    }

    /// Enables shadow casting with the default shadow map settings.
    #[must_use]
    pub fn with_shadows(mut self) -> Self {
        self.cast_shadows = true;
        if self.shadow.is_none() {
            self.shadow = Some(ShadowConfig::default());
        }
        self
    }
}
