//! Visual primitives and the scene graph that owns them.
//!
//! A [`Scene`] is a flat list of primitives under one root group transform.
//! Effects create primitives once at mount and mutate their transforms and
//! materials every frame.

use glam::{EulerRot, Mat4, Quat, Vec3};

use super::texture::TextureHandle;

/// Linear RGB color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_hex(0xffffff);
    pub const BLACK: Color = Color::from_hex(0x000000);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return None;
        }
        u32::from_str_radix(hex, 16).ok().map(Self::from_hex)
    }

    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// `#rrggbb` for CSS/SVG output.
    pub fn to_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// Euler angles in radians, applied X then Y then Z
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: Color,
    pub opacity: f32,
    pub emissive: Color,
    pub emissive_intensity: f32,
    /// Point size in world units (particles only)
    pub size: f32,
    pub texture: Option<TextureHandle>,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            opacity: 1.0,
            emissive: Color::BLACK,
            emissive_intensity: 0.0,
            size: 1.0,
            texture: None,
        }
    }
}

impl Material {
    pub fn colored(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_emissive(mut self, emissive: Color, intensity: f32) -> Self {
        self.emissive = emissive;
        self.emissive_intensity = intensity;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveKind {
    Particle,
    /// Flat card of the given size in world units
    Card { width: f32, height: f32 },
    /// Lights are part of the scene but never drawn
    Light { intensity: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u32);

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub id: PrimitiveId,
    pub kind: PrimitiveKind,
    pub transform: Transform,
    pub material: Material,
    pub visible: bool,
    /// Takes hover and clicks; drawn plain if its texture fails
    pub interactive: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Group transform applied to every primitive
    pub root: Transform,
    primitives: Vec<Primitive>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, kind: PrimitiveKind, transform: Transform, material: Material) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        self.primitives.push(Primitive {
            id,
            kind,
            transform,
            material,
            visible: true,
            interactive: false,
        });
        id
    }

    /// Mark a primitive as a pointer target.
    pub fn set_interactive(&mut self, id: PrimitiveId) {
        if let Some(primitive) = self.get_mut(id) {
            primitive.interactive = true;
        }
    }

    pub fn add_light(&mut self, position: Vec3, intensity: f32, color: Color) -> PrimitiveId {
        self.add(
            PrimitiveKind::Light { intensity },
            Transform::at(position),
            Material::colored(color),
        )
    }

    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        // Ids are dense and never reused
        self.primitives.get(id.0 as usize).filter(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PrimitiveId) -> Option<&mut Primitive> {
        self.primitives.get_mut(id.0 as usize).filter(|p| p.id == id)
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn primitives_mut(&mut self) -> &mut [Primitive] {
        &mut self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// World-space position of a primitive (root group applied).
    pub fn world_position(&self, primitive: &Primitive) -> Vec3 {
        self.root.matrix().transform_point3(primitive.transform.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parse_and_css_roundtrip() {
        let c = Color::parse("#9c88ff").unwrap();
        assert_eq!(c.to_css(), "#9c88ff");
        assert!(Color::parse("9c88f").is_none());
        assert!(Color::parse("#zzzzzz").is_none());
    }

    #[test]
    fn color_lerp_endpoints() {
        let a = Color::from_hex(0x000000);
        let b = Color::from_hex(0xffffff);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 7.0), b);
    }

    #[test]
    fn scene_ids_are_dense() {
        let mut scene = Scene::new();
        let a = scene.add(PrimitiveKind::Particle, Transform::default(), Material::default());
        let b = scene.add(PrimitiveKind::Particle, Transform::default(), Material::default());
        assert_eq!(a, PrimitiveId(0));
        assert_eq!(b, PrimitiveId(1));
        assert!(scene.get(PrimitiveId(2)).is_none());
    }

    #[test]
    fn world_position_applies_root_group() {
        let mut scene = Scene::new();
        let id = scene.add(
            PrimitiveKind::Particle,
            Transform::at(Vec3::new(1.0, 0.0, 0.0)),
            Material::default(),
        );
        scene.root.position = Vec3::new(0.0, 2.0, 0.0);
        let p = scene.get(id).unwrap();
        let world = scene.world_position(p);
        assert!((world - Vec3::new(1.0, 2.0, 0.0)).length() < 1e-5);
    }
}
