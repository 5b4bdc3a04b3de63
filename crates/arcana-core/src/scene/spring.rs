//! Damped springs for hover and layout motion.

use glam::Vec3;

/// Spring parameters: stiffness (tension), damping (friction), mass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Tight, barely overshooting motion used by the deck.
    pub fn deck() -> Self {
        Self::new(280.0, 60.0, 1.0)
    }

    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::deck()
    }
}

/// Largest integration step; longer frames are split.
const MAX_STEP: f32 = 1.0 / 120.0;

#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        // Scene units, not pixels
        const EPSILON: f32 = 1e-3;
        const VELOCITY_EPSILON: f32 = 1e-2;
        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    pub fn step(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        while remaining > 0.0 {
            if self.is_settled() {
                self.value = self.target;
                self.velocity = 0.0;
                return;
            }
            let h = remaining.min(MAX_STEP);
            self.rk4(h);
            remaining -= h;
        }
    }

    fn rk4(&mut self, dt: f32) {
        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(self.value + k1_x * dt * 0.5, self.velocity + k1_v * dt * 0.5);
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(self.value + k2_x * dt * 0.5, self.velocity + k2_v * dt * 0.5);
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

/// Three independent springs driving a vector.
#[derive(Clone, Copy, Debug)]
pub struct Spring3 {
    x: Spring,
    y: Spring,
    z: Spring,
}

impl Spring3 {
    pub fn new(config: SpringConfig, initial: Vec3) -> Self {
        Self {
            x: Spring::new(config, initial.x),
            y: Spring::new(config, initial.y),
            z: Spring::new(config, initial.z),
        }
    }

    pub fn value(&self) -> Vec3 {
        Vec3::new(self.x.value(), self.y.value(), self.z.value())
    }

    pub fn target(&self) -> Vec3 {
        Vec3::new(self.x.target(), self.y.target(), self.z.target())
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
        self.z.set_target(target.z);
    }

    pub fn step(&mut self, dt: f32) {
        self.x.step(dt);
        self.y.step(dt);
        self.z.step(dt);
    }

    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled() && self.z.is_settled()
    }
}
